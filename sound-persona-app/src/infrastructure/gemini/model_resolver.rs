use async_trait::async_trait;
use sound_persona_errors::AppError;

const GENERATE_CONTENT: &str = "generateContent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// Model id without the `models/` prefix, e.g. `gemini-2.0-flash`.
    pub name: String,
    pub supported_methods: Vec<String>,
}

impl ModelInfo {
    pub fn new(name: impl Into<String>, supported_methods: &[&str]) -> Self {
        let name = name.into();
        Self {
            name: name.strip_prefix("models/").unwrap_or(&name).to_string(),
            supported_methods: supported_methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn can_generate(&self) -> bool {
        self.supported_methods.iter().any(|m| m == GENERATE_CONTENT)
    }
}

/// Anything that can list the models available to the configured credential.
#[async_trait]
pub trait ModelCatalog: Send + Sync {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, AppError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSelection {
    Fixed(String),
    /// Pick the first capable model whose name contains a preference, in
    /// preference order, else the first capable model at all.
    Discover { preferences: Vec<String> },
}

pub fn select_model(models: &[ModelInfo], preferences: &[String]) -> Option<String> {
    let capable: Vec<&ModelInfo> = models.iter().filter(|m| m.can_generate()).collect();

    preferences
        .iter()
        .find_map(|pref| capable.iter().find(|m| m.name.contains(pref.as_str())))
        .or_else(|| capable.first())
        .map(|m| m.name.clone())
}

pub async fn resolve_model(
    catalog: &dyn ModelCatalog,
    selection: &ModelSelection,
) -> Result<String, AppError> {
    match selection {
        ModelSelection::Fixed(name) => Ok(name.clone()),
        ModelSelection::Discover { preferences } => {
            let models = catalog.list_models().await?;
            tracing::info!("Discovered {} models", models.len());

            select_model(&models, preferences).ok_or_else(|| {
                AppError::Configuration("利用可能な生成モデルが見つかりません".to_string())
            })
        }
    }
}
