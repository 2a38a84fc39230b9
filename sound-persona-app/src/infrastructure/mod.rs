pub mod extraction;
pub mod gemini;
pub mod share;
