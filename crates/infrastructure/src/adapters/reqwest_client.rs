//! Catalog client implementation using reqwest.
//!
//! This adapter implements the `ProductApi` port over a single shared
//! `reqwest::Client`. Dropping the adapter releases the client.

use reqwest::Client;
use serde::de::DeserializeOwned;
use storefront_domain::ProductId;
use tracing::{debug, warn};
use url::Url;

use crate::api::{ApiError, ProductApi, ProductDto, ProductsResponseDto};
use crate::config::ClientConfig;
use crate::serialization::from_json_bytes;

/// HTTP catalog client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestProductApi {
    client: Client,
    base_url: Url,
}

impl ReqwestProductApi {
    /// Creates a catalog client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the client cannot be
    /// created.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = Self::parse_base_url(&config.base_url)?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Returns the catalog base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
        let url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl(format!("{e}: {raw}")))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("not a base URL: {raw}")));
        }
        Ok(url)
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ApiError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Maps reqwest errors to `ApiError`.
    fn map_error(error: &reqwest::Error, url: &Url) -> ApiError {
        if error.is_timeout() {
            return ApiError::Timeout {
                url: url.to_string(),
            };
        }
        ApiError::Transport(error.to_string())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "catalog request");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, error = %e, "catalog request failed");
            Self::map_error(&e, &url)
        })?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "catalog response");
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "catalog returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(%url, error = %e, "failed to read catalog response");
            Self::map_error(&e, &url)
        })?;

        from_json_bytes(&body).map_err(|e| {
            warn!(%url, error = %e, "failed to decode catalog response");
            ApiError::Decode(e.to_string())
        })
    }
}

impl ProductApi for ReqwestProductApi {
    async fn fetch_all(&self) -> Result<ProductsResponseDto, ApiError> {
        let url = self.endpoint(&["products"])?;
        self.get_json(url).await
    }

    async fn fetch_by_id(&self, id: ProductId) -> Result<ProductDto, ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&["products", id.as_str()])?;
        self.get_json(url).await
    }

    async fn search(&self, query: &str) -> Result<ProductsResponseDto, ApiError> {
        let mut url = self.endpoint(&["products", "search"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.get_json(url).await
    }

    async fn fetch_by_category(&self, category: &str) -> Result<ProductsResponseDto, ApiError> {
        let url = self.endpoint(&["products", "category", category])?;
        self.get_json(url).await
    }
}
