// Файл: mod.rs
// Провайдер ФИАС: модели и запросы

pub mod models;
pub mod requests;
