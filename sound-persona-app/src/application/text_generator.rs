use async_trait::async_trait;
use sound_persona_errors::AppError;

/// A hosted model that turns one prompt into one markdown reply.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: String) -> Result<String, AppError>;
}
