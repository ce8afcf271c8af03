// Файл: core/error.rs
// Единый тип ошибок клиента ФИАС.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FiasError {
    // Сетевые ошибки и не-2xx статусы (через error_for_status)
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    // Токен содержит символы, недопустимые в значении заголовка
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Failed to get token: unexpected status {status}")]
    TokenUnavailable { status: StatusCode },
}

impl FiasError {
    /// HTTP-статус ответа, если ошибка его несёт.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FiasError::Network(e) => e.status(),
            FiasError::TokenUnavailable { status } => Some(*status),
            _ => None,
        }
    }
}
