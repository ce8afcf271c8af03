//! Клиент публичного API ФИАС (Федеральной информационной адресной системы).
//!
//! ```rust,no_run
//! use fias_public_api::{get_token, FiasPublicApi, DEFAULT_ORIGIN};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fias_public_api::FiasError> {
//!     let api = FiasPublicApi::new(get_token(DEFAULT_ORIGIN).await?);
//!     let hints = api.search("Москва, Красная площадь").await?;
//!     if let Some(id) = hints.first().and_then(fias_public_api::hint_object_id) {
//!         let _details = api.details(id).await?;
//!     }
//!     Ok(())
//! }
//! ```

mod core;
mod providers;

pub use crate::core::error::FiasError;
pub use crate::core::http::{create_http_client, HTTP_CLIENT};
pub use crate::providers::fias::models::{hint_object_id, Hint};
pub use crate::providers::fias::requests::{
    get_token, standard_headers, Endpoints, FiasPublicApi, DEFAULT_ORIGIN, HINT_URL, ITEM_URL,
    SETTINGS_URL,
};
