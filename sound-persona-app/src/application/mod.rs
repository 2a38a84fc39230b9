mod analyze_persona;
mod text_generator;

pub use analyze_persona::AnalyzePersona;
pub use text_generator::TextGenerator;
