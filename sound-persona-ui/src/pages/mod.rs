mod home;

pub use home::{AnalyzePersonaFn, HomePage};
