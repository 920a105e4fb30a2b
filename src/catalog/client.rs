use crate::catalog::models::{Album, AlbumSummary};
use reqwest::{Client, Error as ReqwestError, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

/// A catalog request failed. Every variant is shown to the user the same
/// way, through its `Display` text.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Network response was not ok (HTTP {0})")]
    Status(StatusCode),
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
}

/// Read-only client for the album catalog API
#[derive(Clone, Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// `base_url` is normalized with [`normalize_base_url`].
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `{base}albums/`
    pub async fn fetch_albums(&self) -> Result<Vec<AlbumSummary>, CatalogError> {
        self.get_json(&self.albums_url()).await
    }

    /// GET `{base}albums/{id}`
    pub async fn fetch_album(&self, id: &str) -> Result<Album, CatalogError> {
        self.get_json(&self.album_url(id)).await
    }

    pub fn albums_url(&self) -> String {
        format!("{}albums/", self.base_url)
    }

    pub fn album_url(&self, id: &str) -> String {
        format!("{}albums/{}", self.base_url, urlencoding::encode(id))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            CatalogError::Request(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Request to {} returned {}", url, status);
            return Err(CatalogError::Status(status));
        }

        response.json::<T>().await.map_err(|e| {
            warn!("Failed to decode response from {}: {}", url, e);
            CatalogError::Request(e)
        })
    }
}

/// Treat a base URL as a directory: drop any query or fragment and make the
/// path end in '/', so endpoint paths are appended to it rather than
/// replacing its last segment.
pub fn normalize_base_url(mut url: Url) -> Url {
    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
