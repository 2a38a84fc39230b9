use crate::domain::AnalysisResult;

pub const DEFAULT_INTENT_ENDPOINT: &str = "https://twitter.com/intent/tweet";

const UNKNOWN_TYPE_CODE: &str = "????";
const UNKNOWN_TITLE: &str = "名もなきリスナー";
const UNKNOWN_COLOR_NAME: &str = "未知の色";

#[derive(Debug, Clone)]
pub struct ShareLinkBuilder {
    app_url: String,
    intent_endpoint: String,
}

impl ShareLinkBuilder {
    pub fn new(app_url: impl Into<String>) -> Self {
        Self {
            app_url: app_url.into(),
            intent_endpoint: DEFAULT_INTENT_ENDPOINT.to_string(),
        }
    }

    pub fn with_intent_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.intent_endpoint = endpoint.into();
        self
    }

    pub fn share_text(analysis: &AnalysisResult, value: &str) -> String {
        let type_code = analysis.type_code.as_deref().unwrap_or(UNKNOWN_TYPE_CODE);
        let title = analysis.title.as_deref().unwrap_or(UNKNOWN_TITLE);
        let color_name = analysis.color_name.as_deref().unwrap_or(UNKNOWN_COLOR_NAME);

        format!(
            "【Sound Persona 音楽診断】\n私のタイプ：{}『 {} 』\n魂の色：{}\n音楽とは「{}」である。\n#SoundPersona",
            type_code, title, color_name, value
        )
    }

    pub fn build(&self, analysis: &AnalysisResult, value: &str) -> String {
        let text = Self::share_text(analysis, value);
        format!(
            "{}?text={}&url={}",
            self.intent_endpoint,
            urlencoding::encode(&text),
            urlencoding::encode(&self.app_url)
        )
    }
}
