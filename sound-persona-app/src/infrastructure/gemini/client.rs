use super::model_resolver::{resolve_model, ModelCatalog, ModelInfo, ModelSelection};
use super::types::{GenerateContentRequest, GenerateContentResponse, ListModelsResponse};
use crate::application::TextGenerator;
use async_trait::async_trait;
use sound_persona_errors::AppError;
use tokio::sync::OnceCell;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    api_base: String,
    selection: ModelSelection,
    model: OnceCell<String>,
}

impl GeminiClient {
    pub fn new(api_key: String, selection: ModelSelection) -> Self {
        Self::with_api_base(api_key, selection, DEFAULT_API_BASE)
    }

    pub fn with_api_base(api_key: String, selection: ModelSelection, api_base: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            selection,
            model: OnceCell::new(),
        }
    }

    /// Resolves the model once; a failed discovery is retried on the next call.
    pub async fn model(&self) -> Result<&str, AppError> {
        self.model
            .get_or_try_init(|| async {
                let model = resolve_model(self, &self.selection).await?;
                tracing::info!("Using Gemini model: {}", model);
                Ok::<_, AppError>(model)
            })
            .await
            .map(String::as_str)
    }

    async fn list_models_page(
        &self,
        page_token: Option<&str>,
    ) -> Result<ListModelsResponse, AppError> {
        let mut request = self
            .http_client
            .get(format!("{}/models", self.api_base))
            .header("x-goog-api-key", &self.api_key)
            .query(&[("pageSize", "1000")]);

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Configuration(format!("モデル一覧の取得に失敗: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini list models error: {} - {}", status, body);
            return Err(AppError::Configuration(format!(
                "モデル一覧の取得に失敗: {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Configuration(format!("モデル一覧の解析に失敗: {}", e)))
    }
}

#[async_trait]
impl ModelCatalog for GeminiClient {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, AppError> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_models_page(page_token.as_deref()).await?;
            models.extend(page.models.into_iter().map(|m| {
                let methods: Vec<&str> =
                    m.supported_generation_methods.iter().map(String::as_str).collect();
                ModelInfo::new(m.name, &methods)
            }));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(models)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: String) -> Result<String, AppError> {
        let model = self.model().await?;
        let request = GenerateContentRequest::new(prompt);

        let response = self
            .http_client
            .post(format!("{}/models/{}:generateContent", self.api_base, model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini error: {} - {}", status, body);
            return Err(AppError::Generation(format!("API error: {}", status)));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        if let Some(reason) = completion.block_reason() {
            tracing::warn!("Gemini blocked the prompt: {}", reason);
            return Err(AppError::Generation(format!(
                "リクエストがブロックされました ({})",
                reason
            )));
        }

        completion.text().ok_or_else(|| {
            let finish_reason = completion
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_default();
            tracing::warn!("Gemini returned no text, finish reason: {:?}", finish_reason);
            AppError::Generation("AIから応答がありませんでした".to_string())
        })
    }
}
