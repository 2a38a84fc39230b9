mod analysis;
mod persona_type;
mod report;
mod user_input;

pub use analysis::AnalysisResult;
pub use persona_type::{Axis, PersonaType, AXES, PERSONA_TYPES};
pub use report::PersonaReport;
pub use user_input::{Song, UserInput};
