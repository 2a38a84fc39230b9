use crate::application::AnalyzePersona;
use crate::config::AppConfig;
use crate::infrastructure::gemini::GeminiClient;
use crate::infrastructure::share::ShareLinkBuilder;
use sound_persona_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub analyze_persona: Arc<AnalyzePersona>,
    pub app_url: String,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let client = GeminiClient::with_api_base(config.api_key, config.model, &config.api_base);

        Self {
            analyze_persona: Arc::new(AnalyzePersona::new(
                Arc::new(client),
                ShareLinkBuilder::new(config.app_url.clone()),
            )),
            app_url: config.app_url,
        }
    }

    pub fn from_env(default_app_url: &str) -> Result<Self, AppError> {
        let config = AppConfig::from_env(default_app_url)?;
        tracing::info!("Using Gemini backend ({:?})", config.model);
        Ok(Self::new(config))
    }
}
