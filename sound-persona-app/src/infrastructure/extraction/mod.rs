mod response_extractor;

pub use response_extractor::extract_analysis;
