use super::TextGenerator;
use crate::domain::{PersonaReport, UserInput};
use crate::infrastructure::extraction::extract_analysis;
use crate::infrastructure::gemini::build_persona_prompt;
use crate::infrastructure::share::ShareLinkBuilder;
use sound_persona_errors::AppError;
use std::sync::Arc;

pub struct AnalyzePersona {
    generator: Arc<dyn TextGenerator>,
    share_links: ShareLinkBuilder,
}

impl AnalyzePersona {
    pub fn new(generator: Arc<dyn TextGenerator>, share_links: ShareLinkBuilder) -> Self {
        Self {
            generator,
            share_links,
        }
    }

    pub async fn execute(&self, input: UserInput) -> Result<PersonaReport, AppError> {
        let prompt = build_persona_prompt(&input).inspect_err(|_| {
            tracing::warn!("Rejected submission with missing required fields");
        })?;

        let raw_text = self.generator.generate(prompt).await?;
        let analysis = extract_analysis(&raw_text);

        tracing::info!(
            type_code = analysis.type_code.as_deref().unwrap_or("-"),
            color_hex = analysis.color_hex.as_deref().unwrap_or("-"),
            "Analysis complete"
        );

        let share_url = self.share_links.build(&analysis, &input.value);
        Ok(PersonaReport::new(analysis, share_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Song;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeGenerator {
        reply: Result<String, AppError>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        fn replying(reply: Result<String, AppError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: String) -> Result<String, AppError> {
            self.prompts.lock().unwrap().push(prompt);
            self.reply.clone()
        }
    }

    fn use_case(generator: Arc<FakeGenerator>) -> AnalyzePersona {
        AnalyzePersona::new(generator, ShareLinkBuilder::new("https://sound-persona.example.app"))
    }

    fn input() -> UserInput {
        UserInput::new([
            Song::new("Creep", "Radiohead"),
            Song::new("Lemon", "米津玄師"),
            Song::default(),
        ])
        .with_situation("深夜")
        .with_value("救い")
    }

    #[tokio::test]
    async fn test_full_flow() {
        let generator = FakeGenerator::replying(Ok(
            "## 🎧 Type: **[STUB]**\n### 『 孤高の吟遊詩人 』\n* カラー名: 灰色\n* カラーコード: **#1a2b3c**".to_string(),
        ));
        let report = use_case(generator.clone()).execute(input()).await.unwrap();

        assert_eq!(generator.calls(), 1);
        assert!(generator.prompts.lock().unwrap()[0].contains("Lemon (Artist: 米津玄師)"));

        assert_eq!(report.analysis.type_code.as_deref(), Some("STUB"));
        assert_eq!(report.analysis.title.as_deref(), Some("孤高の吟遊詩人"));
        assert_eq!(report.analysis.color_hex.as_deref(), Some("#1a2b3c"));
        assert_eq!(report.persona.map(|p| p.code), Some("STUB"));
        assert_eq!(report.soulmate.map(|p| p.code), Some("LEMD"));
        assert!(report.share_url.contains(&*urlencoding::encode("音楽とは「救い」である。")));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_generator() {
        let generator = FakeGenerator::replying(Ok("unused".to_string()));
        let result = use_case(generator.clone())
            .execute(UserInput::new(Default::default()).with_element("歌詞"))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_generation_error_is_surfaced() {
        let generator =
            FakeGenerator::replying(Err(AppError::Generation("API error: 503".to_string())));
        let result = use_case(generator.clone()).execute(input()).await;

        assert_eq!(result.unwrap_err(), AppError::Generation("API error: 503".to_string()));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_unstructured_reply_still_succeeds() {
        let generator = FakeGenerator::replying(Ok("うまく分析できませんでした。".to_string()));
        let report = use_case(generator).execute(input()).await.unwrap();

        assert_eq!(report.analysis.raw_text, "うまく分析できませんでした。");
        assert!(report.analysis.type_code.is_none());
        assert!(report.persona.is_none());
        assert!(report.share_url.starts_with("https://twitter.com/intent/tweet?text="));
    }
}
