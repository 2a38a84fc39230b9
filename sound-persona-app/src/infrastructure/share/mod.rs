mod share_link;

pub use share_link::{ShareLinkBuilder, DEFAULT_INTENT_ENDPOINT};
