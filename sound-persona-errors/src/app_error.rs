use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("設定エラー: {0}")]
    Configuration(String),

    #[error("入力エラー: {0}")]
    Validation(String),

    #[error("生成エラー: {0}")]
    Generation(String),

    #[error("内部エラー: {0}")]
    Internal(String),
}

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("設定エラー: ") {
            Ok(AppError::Configuration(rest.to_string()))
        } else if let Some(rest) = s.strip_prefix("入力エラー: ") {
            Ok(AppError::Validation(rest.to_string()))
        } else if let Some(rest) = s.strip_prefix("生成エラー: ") {
            Ok(AppError::Generation(rest.to_string()))
        } else if let Some(rest) = s.strip_prefix("内部エラー: ") {
            Ok(AppError::Internal(rest.to_string()))
        } else {
            Ok(AppError::Internal(s.to_string()))
        }
    }
}

impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration(_) => {
                "⚠️ APIキーまたはモデルの設定に問題があります。管理者に連絡してください。".to_string()
            }
            Self::Validation(msg) => format!("⚠️ {}", msg),
            Self::Generation(msg) => format!("エラーが発生しました: {}", msg),
            Self::Internal(_) => "サーバーで問題が発生しました。時間をおいて再度お試しください。".to_string(),
        }
    }

    /// Validation problems are shown as warnings and the form can be resubmitted.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
                AppError::Validation(_) => StatusCode::BAD_REQUEST,
                AppError::Generation(_) => StatusCode::BAD_GATEWAY,
                AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            let message = self.user_message();
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}
