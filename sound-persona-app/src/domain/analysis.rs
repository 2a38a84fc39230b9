use serde::{Deserialize, Serialize};

/// Generated markdown plus whatever could be picked out of it.
///
/// Every structured field is best-effort; `None` means the model did not
/// follow the requested format for that part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub raw_text: String,
    pub type_code: Option<String>,
    pub title: Option<String>,
    pub color_name: Option<String>,
    pub color_hex: Option<String>,
}

impl AnalysisResult {
    pub fn new(raw_text: String) -> Self {
        Self {
            raw_text,
            ..Self::default()
        }
    }

    pub fn with_type_code(mut self, type_code: Option<String>) -> Self {
        self.type_code = type_code;
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_color_name(mut self, color_name: Option<String>) -> Self {
        self.color_name = color_name;
        self
    }

    pub fn with_color_hex(mut self, color_hex: Option<String>) -> Self {
        self.color_hex = color_hex;
        self
    }
}
