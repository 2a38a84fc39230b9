use crate::infrastructure::gemini::{ModelSelection, DEFAULT_API_BASE};
use sound_persona_errors::AppError;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_PREFERENCES: &[&str] = &["flash", "pro"];
const API_KEY_VARS: &[&str] = &["GOOGLE_API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    Explicit(String),
    /// Environment variables tried in order.
    Env(Vec<String>),
}

impl ApiKeySource {
    pub fn resolve<F>(&self, lookup: F) -> Result<String, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            Self::Explicit(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            Self::Explicit(_) => Err(AppError::Configuration("APIキーが空です".to_string())),
            Self::Env(vars) => vars
                .iter()
                .filter_map(|var| lookup(var.as_str()))
                .map(|key| key.trim().to_string())
                .find(|key| !key.is_empty())
                .ok_or_else(|| {
                    AppError::Configuration(format!(
                        "APIキーが設定されていません ({})",
                        vars.join(" / ")
                    ))
                }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: ModelSelection,
    pub api_base: String,
    /// Public address of this deployment, used in share links.
    pub app_url: String,
}

impl AppConfig {
    pub fn from_env(default_app_url: &str) -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok(), default_app_url)
    }

    pub fn from_lookup<F>(lookup: F, default_app_url: &str) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key_source = ApiKeySource::Env(API_KEY_VARS.iter().map(|v| v.to_string()).collect());
        Self::from_key_source(&key_source, lookup, default_app_url)
    }

    pub fn from_key_source<F>(
        key_source: &ApiKeySource,
        lookup: F,
        default_app_url: &str,
    ) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = key_source.resolve(&lookup)?;

        let model = match lookup("GEMINI_MODEL").map(|m| m.trim().to_string()) {
            Some(m) if m.eq_ignore_ascii_case("auto") => ModelSelection::Discover {
                preferences: parse_preferences(lookup("GEMINI_MODEL_PREFERENCES")),
            },
            Some(m) if !m.is_empty() => ModelSelection::Fixed(m),
            _ => ModelSelection::Fixed(DEFAULT_MODEL.to_string()),
        };

        let api_base = lookup("GEMINI_API_BASE")
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let app_url = match lookup("APP_URL").filter(|u| !u.trim().is_empty()) {
            Some(url) => url,
            None => {
                tracing::warn!("APP_URL is not set, share links will point at {}", default_app_url);
                default_app_url.to_string()
            }
        };

        Ok(Self {
            api_key,
            model,
            api_base,
            app_url: validate_app_url(&app_url)?,
        })
    }
}

fn parse_preferences(raw: Option<String>) -> Vec<String> {
    let parsed: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    if parsed.is_empty() {
        DEFAULT_PREFERENCES.iter().map(|p| p.to_string()).collect()
    } else {
        parsed
    }
}

/// Checks the address but keeps it as written, so share links carry exactly
/// the configured value.
fn validate_app_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| AppError::Configuration(format!("APP_URL が不正です: {}", e)))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(AppError::Configuration(format!(
            "APP_URL は http(s) のURLにしてください: {}",
            raw
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnalysisResult;
    use crate::infrastructure::share::ShareLinkBuilder;
    use std::collections::HashMap;

    const FALLBACK: &str = "http://127.0.0.1:3000";

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(env(&[("GOOGLE_API_KEY", "k1")]), FALLBACK).unwrap();

        assert_eq!(config.api_key, "k1");
        assert_eq!(config.model, ModelSelection::Fixed(DEFAULT_MODEL.to_string()));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.app_url, "http://127.0.0.1:3000");
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let result = AppConfig::from_lookup(env(&[("GOOGLE_API_KEY", "  ")]), FALLBACK);
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_key_fallback_order() {
        let config =
            AppConfig::from_lookup(env(&[("GEMINI_API_KEY", "k2")]), FALLBACK).unwrap();
        assert_eq!(config.api_key, "k2");

        let config = AppConfig::from_lookup(
            env(&[("GOOGLE_API_KEY", "k1"), ("GEMINI_API_KEY", "k2")]),
            FALLBACK,
        )
        .unwrap();
        assert_eq!(config.api_key, "k1");
    }

    #[test]
    fn test_explicit_key_wins() {
        let source = ApiKeySource::Explicit(" secret ".to_string());
        assert_eq!(source.resolve(env(&[("GOOGLE_API_KEY", "k1")])).unwrap(), "secret");
        assert!(ApiKeySource::Explicit(String::new()).resolve(env(&[])).is_err());

        let config = AppConfig::from_key_source(
            &ApiKeySource::Explicit("secret".to_string()),
            env(&[("GOOGLE_API_KEY", "k1")]),
            FALLBACK,
        )
        .unwrap();
        assert_eq!(config.api_key, "secret");
    }

    #[test]
    fn test_model_discovery() {
        let config = AppConfig::from_lookup(
            env(&[
                ("GOOGLE_API_KEY", "k"),
                ("GEMINI_MODEL", "auto"),
                ("GEMINI_MODEL_PREFERENCES", "pro, ,1.5"),
            ]),
            FALLBACK,
        )
        .unwrap();

        assert_eq!(
            config.model,
            ModelSelection::Discover {
                preferences: vec!["pro".to_string(), "1.5".to_string()]
            }
        );
    }

    #[test]
    fn test_model_discovery_default_preferences() {
        let config = AppConfig::from_lookup(
            env(&[("GOOGLE_API_KEY", "k"), ("GEMINI_MODEL", "AUTO")]),
            FALLBACK,
        )
        .unwrap();

        assert_eq!(
            config.model,
            ModelSelection::Discover {
                preferences: vec!["flash".to_string(), "pro".to_string()]
            }
        );
    }

    #[test]
    fn test_app_url_from_env() {
        let config = AppConfig::from_lookup(
            env(&[
                ("GOOGLE_API_KEY", "k"),
                ("APP_URL", "https://sound-persona.example.app"),
                ("GEMINI_MODEL", "gemini-1.5-pro"),
            ]),
            FALLBACK,
        )
        .unwrap();

        assert_eq!(config.app_url, "https://sound-persona.example.app");
        assert_eq!(config.model, ModelSelection::Fixed("gemini-1.5-pro".to_string()));
    }

    #[test]
    fn test_app_url_is_kept_as_written() {
        for configured in [
            "https://sound-persona.example.app",
            "https://sound-persona.example.app/",
            "http://localhost:8501/persona?ref=share",
        ] {
            let config = AppConfig::from_lookup(
                env(&[("GOOGLE_API_KEY", "k"), ("APP_URL", &format!("  {}  ", configured))]),
                FALLBACK,
            )
            .unwrap();
            assert_eq!(config.app_url, configured);
        }
    }

    #[test]
    fn test_share_link_carries_configured_app_url() {
        let configured = "https://sound-persona.example.app";
        let config = AppConfig::from_lookup(
            env(&[("GOOGLE_API_KEY", "k"), ("APP_URL", configured)]),
            FALLBACK,
        )
        .unwrap();

        let link = ShareLinkBuilder::new(config.app_url).build(&AnalysisResult::default(), "救い");
        let encoded = link
            .split_once("&url=")
            .map(|(_, u)| u)
            .unwrap_or_default();

        assert_eq!(urlencoding::decode(encoded).unwrap(), configured);
    }

    #[test]
    fn test_invalid_app_url() {
        for bad in ["not a url", "ftp://example.com", "mailto:a@b.c"] {
            let result =
                AppConfig::from_lookup(env(&[("GOOGLE_API_KEY", "k"), ("APP_URL", bad)]), FALLBACK);
            assert!(matches!(result, Err(AppError::Configuration(_))), "{}", bad);
        }
    }
}
