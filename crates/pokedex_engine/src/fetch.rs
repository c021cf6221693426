use std::time::Duration;

use futures_util::StreamExt;
use pokedex_core::{page_offset, Entity, EntityId, ListPage, PAGE_SIZE};
use pokedex_logging::pokedex_debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::wire::{WireEntity, WireListPage};
use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    /// Cap on concurrent detail requests in one batch; `None` fetches all at once.
    pub max_concurrent_details: Option<usize>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 4 * 1024 * 1024,
            max_concurrent_details: None,
        }
    }
}

/// How a detail record is addressed: by id, or by the url a list entry carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRef {
    Id(EntityId),
    Url(String),
}

impl DetailRef {
    /// Key shared by every reference naming the same record.
    ///
    /// Urls ending in a numeric segment (`.../pokemon/25/`) collapse to that id.
    pub fn cache_key(&self) -> String {
        match self {
            DetailRef::Id(id) => id.to_string(),
            DetailRef::Url(raw) => Url::parse(raw)
                .ok()
                .and_then(|url| {
                    url.path_segments()?
                        .filter(|segment| !segment.is_empty())
                        .last()
                        .and_then(|segment| segment.parse::<EntityId>().ok())
                })
                .map(|id| id.to_string())
                .unwrap_or_else(|| raw.clone()),
        }
    }
}

/// Remote catalog operations.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// List envelope for a 1-indexed page of [`PAGE_SIZE`] entries.
    async fn fetch_page(&self, page: u32) -> Result<ListPage, FetchError>;

    async fn fetch_detail(&self, reference: &DetailRef) -> Result<Entity, FetchError>;
}

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    settings: FetchSettings,
    base: Url,
    client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut base_url = settings.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base = Url::parse(&base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            base,
            client,
        })
    }

    pub fn page_url(&self, page: u32) -> Result<Url, FetchError> {
        let mut url = self
            .base
            .join("pokemon")
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("limit", &PAGE_SIZE.to_string())
            .append_pair("offset", &page_offset(page).to_string());
        Ok(url)
    }

    pub fn detail_url(&self, reference: &DetailRef) -> Result<Url, FetchError> {
        let joined = match reference {
            DetailRef::Id(id) => self.base.join(&format!("pokemon/{id}")),
            DetailRef::Url(raw) => Url::parse(raw),
        };
        joined.map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        pokedex_debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("{status} for {url}"),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, format!("{url}: {err}")))
    }
}

#[async_trait::async_trait]
impl CatalogSource for PokeApiClient {
    async fn fetch_page(&self, page: u32) -> Result<ListPage, FetchError> {
        let url = self.page_url(page)?;
        let wire: WireListPage = self.get_json(url).await?;
        Ok(wire.into())
    }

    async fn fetch_detail(&self, reference: &DetailRef) -> Result<Entity, FetchError> {
        let url = self.detail_url(reference)?;
        let wire: WireEntity = self.get_json(url).await?;
        Ok(wire.into())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
