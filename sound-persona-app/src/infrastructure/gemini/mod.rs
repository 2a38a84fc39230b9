mod client;
mod model_resolver;
mod prompt;
mod types;

pub use client::{GeminiClient, DEFAULT_API_BASE};
pub use model_resolver::{resolve_model, select_model, ModelCatalog, ModelInfo, ModelSelection};
pub use prompt::build_persona_prompt;
