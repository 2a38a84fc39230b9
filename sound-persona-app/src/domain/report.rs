use super::{AnalysisResult, PersonaType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaReport {
    pub analysis: AnalysisResult,
    pub share_url: String,
    /// Taxonomy entry for the extracted code, when the code is a known one.
    pub persona: Option<PersonaType>,
    pub soulmate: Option<PersonaType>,
    pub analyzed_at: chrono::DateTime<chrono::Utc>,
}

impl PersonaReport {
    pub fn new(analysis: AnalysisResult, share_url: String) -> Self {
        let persona = analysis
            .type_code
            .as_deref()
            .and_then(PersonaType::from_code)
            .copied();
        let soulmate = persona.map(|p| *p.opposite());

        Self {
            analysis,
            share_url,
            persona,
            soulmate,
            analyzed_at: chrono::Utc::now(),
        }
    }
}
