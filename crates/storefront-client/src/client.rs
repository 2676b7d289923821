//! HTTP client for the product catalog endpoint.

use reqwest::StatusCode;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::product::{NewProduct, Product};

/// REST client for the product catalog.
///
/// Wraps a [`reqwest::Client`] and maps transport, status, and decode
/// failures into [`StoreError`]. One instance is shared by all store
/// operations; it holds no state beyond the connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| StoreError::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { base_url, client })
    }

    fn page_url(&self, skip: u32, take: u32) -> String {
        // OData-style query, newest modifications first.
        format!(
            "{}?$skip={skip}&$top={take}&$orderby=ModifiedDate%20desc",
            self.base_url
        )
    }

    /// Fetches one page of products, `take` items starting at offset `skip`,
    /// ordered by modification time descending.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transport`] when no response arrives,
    /// [`StoreError::Status`] for non-2xx answers, and
    /// [`StoreError::Deserialization`] when the body is not a product array.
    pub async fn fetch_page(&self, skip: u32, take: u32) -> Result<Vec<Product>> {
        let response = self
            .client
            .get(self.page_url(skip, take))
            .send()
            .await
            .map_err(|e| StoreError::Transport {
                message: format!("page request failed: {e}"),
            })?;

        if response.status().is_success() {
            return response
                .json::<Vec<Product>>()
                .await
                .map_err(|e| StoreError::Deserialization {
                    message: format!("invalid product page: {e}"),
                });
        }

        Err(Self::status_error(response).await)
    }

    /// Creates a product and returns the server-echoed result.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transport`], [`StoreError::Status`], or
    /// [`StoreError::Deserialization`] as for [`fetch_page`](Self::fetch_page).
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        let response = self
            .client
            .post(&self.base_url)
            .json(product)
            .send()
            .await
            .map_err(|e| StoreError::Transport {
                message: format!("create request failed: {e}"),
            })?;

        if response.status().is_success() {
            return response
                .json::<Product>()
                .await
                .map_err(|e| StoreError::Deserialization {
                    message: format!("invalid created product: {e}"),
                });
        }

        Err(Self::status_error(response).await)
    }

    /// Deletes the product with the given id. The acknowledgement body is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the catalog reports 404, and
    /// [`StoreError::Transport`] or [`StoreError::Status`] otherwise.
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}{id}", self.base_url))
            .send()
            .await
            .map_err(|e| StoreError::Transport {
                message: format!("delete request failed: {e}"),
            })?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(Self::status_error(response).await)
    }

    async fn status_error(response: reqwest::Response) -> StoreError {
        let status = response.status();
        let body = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| String::from_utf8_lossy(&body).to_string());

        match status {
            StatusCode::NOT_FOUND => StoreError::NotFound { message },
            _ => StoreError::Status {
                status: status.as_u16(),
                message,
            },
        }
    }
}
