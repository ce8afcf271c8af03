// Файл: core/json.rs
// Парсинг JSON-ответов с контекстом для логирования.

use super::error::FiasError;

/// Разбирает тело ответа.
/// `context` — метка для лога (например, "GetAddressHint").
pub fn parse_json_from_text<T: for<'de> serde::Deserialize<'de>>(
    response_text: &str,
    context: &str,
) -> Result<T, FiasError> {
    serde_json::from_str(response_text).map_err(|e| {
        // В лог попадает только ошибка serde, не тело ответа
        log::warn!("Failed to parse JSON for {}: {}", context, e);
        FiasError::from(e)
    })
}
