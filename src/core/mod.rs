// Файл: core/mod.rs
// Общие утилиты: ошибки, HTTP, JSON.

pub mod error;
pub mod http;
pub mod json;
