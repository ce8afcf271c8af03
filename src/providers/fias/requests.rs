// Файл: requests.rs
// Запросы к публичному API ФИАС: токен, поиск подсказок, детали объекта.

use super::models::{HintsResponse, Hint, SearchPayload, SpasSettings, ADDRESS_TYPE};
use crate::core::error::FiasError;
use crate::core::http::{fetch_text, HTTP_CLIENT};
use crate::core::json::parse_json_from_text;
use log::{debug, info};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;
use url::Url;

pub const SETTINGS_URL: &str = "https://fias.nalog.ru/Home/GetSpasSettings";
pub const DEFAULT_ORIGIN: &str = "https://fias.nalog.ru/";
pub const HINT_URL: &str = "https://fias-public-service.nalog.ru/api/spas/v2.0/GetAddressHint";
pub const ITEM_URL: &str =
    "https://fias-public-service.nalog.ru/api/spas/v2.0/GetAddressItemById";

const SETTINGS_PATH: &str = "/Home/GetSpasSettings";
const HINT_PATH: &str = "/api/spas/v2.0/GetAddressHint";
const ITEM_PATH: &str = "/api/spas/v2.0/GetAddressItemById";

const MASTER_TOKEN: &str = "master-token";
const APPLICATION_JSON: &str = "application/json";

/// Адреса эндпоинтов. `Default` указывает на боевые хосты ФИАС.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub settings_url: String,
    pub hint_url: String,
    pub item_url: String,
    /// Значение параметра `url` при запросе токена.
    pub origin: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            settings_url: SETTINGS_URL.to_string(),
            hint_url: HINT_URL.to_string(),
            item_url: ITEM_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl Endpoints {
    /// Те же пути на других хостах (например, на mock-сервере).
    pub fn with_hosts(settings_host: &str, service_host: &str) -> Self {
        let settings_host = settings_host.trim_end_matches('/');
        let service_host = service_host.trim_end_matches('/');
        Self {
            settings_url: format!("{}{}", settings_host, SETTINGS_PATH),
            hint_url: format!("{}{}", service_host, HINT_PATH),
            item_url: format!("{}{}", service_host, ITEM_PATH),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

/// Стандартные заголовки запросов поиска и деталей.
pub fn standard_headers(token: &str) -> Result<HeaderMap, FiasError> {
    let mut token_value = HeaderValue::from_str(token)
        .map_err(|e| FiasError::InvalidHeader(format!("{}: {}", MASTER_TOKEN, e)))?;
    token_value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(MASTER_TOKEN, token_value);
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(APPLICATION_JSON),
    );
    Ok(headers)
}

/// Получает токен с боевого эндпоинта настроек.
/// `url` передаётся сервису как параметр `url` (обычно [`DEFAULT_ORIGIN`]).
pub async fn get_token(url: &str) -> Result<String, FiasError> {
    request_token(&HTTP_CLIENT, SETTINGS_URL, url).await
}

async fn request_token(
    client: &Client,
    settings_url: &str,
    origin: &str,
) -> Result<String, FiasError> {
    let settings_url = Url::parse(settings_url)?;
    debug!("Requesting FIAS token from {}", settings_url);

    let response = client
        .get(settings_url)
        .query(&[("url", origin)])
        .send()
        .await?
        .error_for_status()?;

    // Любой успешный статус, кроме 200, считается отказом
    let status = response.status();
    if status != StatusCode::OK {
        log::warn!("FIAS token endpoint answered {}", status);
        return Err(FiasError::TokenUnavailable { status });
    }

    let text = response.text().await?;
    let settings: SpasSettings = parse_json_from_text(&text, "GetSpasSettings")?;
    info!("FIAS token received");
    Ok(settings.token)
}

/// Клиент публичного API ФИАС.
#[derive(Clone)]
pub struct FiasPublicApi {
    client: Client,
    token: String,
    endpoints: Endpoints,
}

// Токен не выводится
impl fmt::Debug for FiasPublicApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiasPublicApi")
            .field("token", &"<redacted>")
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

impl FiasPublicApi {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoints(token, Endpoints::default())
    }

    pub fn with_endpoints(token: impl Into<String>, endpoints: Endpoints) -> Self {
        Self::with_client(HTTP_CLIENT.clone(), token, endpoints)
    }

    pub fn with_client(client: Client, token: impl Into<String>, endpoints: Endpoints) -> Self {
        Self {
            client,
            token: token.into(),
            endpoints,
        }
    }

    /// Получает токен и создаёт клиент для боевых хостов.
    pub async fn connect() -> Result<Self, FiasError> {
        Self::connect_with(Endpoints::default()).await
    }

    pub async fn connect_with(endpoints: Endpoints) -> Result<Self, FiasError> {
        let token =
            request_token(&HTTP_CLIENT, &endpoints.settings_url, &endpoints.origin).await?;
        Ok(Self::with_endpoints(token, endpoints))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Детали адресного объекта. Тело ответа возвращается без изменений.
    pub async fn details(&self, object_id: i64) -> Result<Value, FiasError> {
        let url = Url::parse(&self.endpoints.item_url)?;
        let headers = standard_headers(&self.token)?;
        debug!("Fetching FIAS object {} from {}", object_id, url);

        let request = self
            .client
            .get(url)
            .query(&[("object_id", object_id), ("address_type", i64::from(ADDRESS_TYPE))])
            .headers(headers);

        let text = fetch_text(request).await?;
        let details = parse_json_from_text::<Value>(&text, "GetAddressItemById")?;
        info!("Fetched details for FIAS object {}", object_id);
        Ok(details)
    }

    /// Поиск подсказок по строке через эндпоинт по умолчанию.
    pub async fn search(&self, search_string: &str) -> Result<Vec<Hint>, FiasError> {
        self.search_at(search_string, &self.endpoints.hint_url).await
    }

    /// Поиск подсказок через явно указанный эндпоинт.
    pub async fn search_at(&self, search_string: &str, url: &str) -> Result<Vec<Hint>, FiasError> {
        let url = Url::parse(url)?;
        let headers = standard_headers(&self.token)?;
        debug!("Searching FIAS hints for {:?} at {}", search_string, url);

        let request = self
            .client
            .post(url)
            .headers(headers)
            .json(&SearchPayload::new(search_string));

        let text = fetch_text(request).await?;
        let response: HintsResponse = parse_json_from_text(&text, "GetAddressHint")?;
        info!("Found {} FIAS hints", response.hints.len());
        Ok(response.hints)
    }
}
