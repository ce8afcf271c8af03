// Файл: core/http.rs
// Общий HTTP-клиент и хелперы выполнения запросов.

use super::error::FiasError;
use once_cell::sync::Lazy;
use reqwest::{header, Client, ClientBuilder, RequestBuilder};
use std::time::Duration;

const APP_USER_AGENT: &str = concat!("fias-public-api/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SEC: u64 = 30;

// Глобальный лениво-инициализируемый клиент.
// reqwest::Client использует Arc внутри, clone() дешёвый.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    client_builder(header::HeaderMap::new())
        .build()
        .expect("Failed to build core HTTP_CLIENT")
});

fn client_builder(mut headers: header::HeaderMap) -> ClientBuilder {
    headers.insert(
        header::USER_AGENT,
        header::HeaderValue::from_static(APP_USER_AGENT),
    );

    Client::builder()
        .default_headers(headers)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SEC))
        .connect_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SEC))
}

/// Клиент с теми же настройками, что и `HTTP_CLIENT`, плюс свои заголовки по умолчанию.
pub fn create_http_client(extra_headers: Option<header::HeaderMap>) -> Result<Client, FiasError> {
    Ok(client_builder(extra_headers.unwrap_or_default()).build()?)
}

/// Отправляет запрос, отклоняет не-2xx статусы и возвращает тело как текст.
pub async fn fetch_text(request: RequestBuilder) -> Result<String, FiasError> {
    let text = request
        .send()
        .await? // -> FiasError::Network
        .error_for_status()? // -> FiasError::Network (HTTP status)
        .text()
        .await?;
    Ok(text)
}
