// Файл: models.rs
// Модели данных ФИАС. Ответы сервиса не типизируются: подсказки и детали
// возвращаются в том виде, в каком пришли.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Одна подсказка поиска (элемент массива `hints`).
pub type Hint = Map<String, Value>;

/// Адресное деление, с которым работают запросы поиска и деталей.
pub(crate) const ADDRESS_TYPE: i32 = 2;

// --- Запросы ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchPayload<'a> {
    pub search_string: &'a str,
    pub address_type: i32,
    pub search_non_active: bool,
}

impl<'a> SearchPayload<'a> {
    pub fn new(search_string: &'a str) -> Self {
        Self {
            search_string,
            address_type: ADDRESS_TYPE,
            search_non_active: false,
        }
    }
}

// --- Ответы (внутренние) ---

#[derive(Debug, Deserialize)]
pub(crate) struct SpasSettings {
    #[serde(rename = "Token")]
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HintsResponse {
    pub hints: Vec<Hint>,
}

/// Числовой `id` подсказки, если он есть.
pub fn hint_object_id(hint: &Hint) -> Option<i64> {
    hint.get("id")?.as_i64()
}
