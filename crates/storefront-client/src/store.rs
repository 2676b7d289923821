//! The product store: accumulated list plus derived most-expensive value.

use tokio::sync::watch;
use tracing::Instrument;

use crate::client::CatalogClient;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::observability::store_span;
use crate::product::{NewProduct, Product, most_expensive};

/// Reactive holder for the product catalog state.
///
/// The store is the only writer of the accumulated list. Every successful
/// page load appends to the list and broadcasts the new state on two watch
/// channels: the full list, and the current most expensive product (`None`
/// while the list is empty). Subscribers attach at any time and immediately
/// observe the latest broadcast value.
///
/// Concurrent [`load_page`](Self::load_page) calls are not de-duplicated;
/// each in-flight request appends its page when it resolves, so the list
/// order reflects network completion order, not call order.
pub struct ProductStore {
    client: CatalogClient,
    config: StoreConfig,
    products_tx: watch::Sender<Vec<Product>>,
    most_expensive_tx: watch::Sender<Option<Product>>,
}

impl ProductStore {
    /// Creates a store with an empty accumulated list.
    ///
    /// Nothing is fetched on construction; call
    /// [`load_first_page`](Self::load_first_page) to populate.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`](crate::StoreError::Config) if the HTTP
    /// client cannot be built.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let client = CatalogClient::new(&config)?;
        let (products_tx, _) = watch::channel(Vec::new());
        let (most_expensive_tx, _) = watch::channel(None);

        Ok(Self {
            client,
            config,
            products_tx,
            most_expensive_tx,
        })
    }

    /// Subscribes to the accumulated list. The receiver starts at the latest
    /// broadcast value.
    #[must_use]
    pub fn products(&self) -> watch::Receiver<Vec<Product>> {
        self.products_tx.subscribe()
    }

    /// Subscribes to the most expensive product, `None` while the list is
    /// empty.
    #[must_use]
    pub fn most_expensive(&self) -> watch::Receiver<Option<Product>> {
        self.most_expensive_tx.subscribe()
    }

    /// Loads one page and appends it to the accumulated list.
    ///
    /// Returns the number of products appended. On failure the list is left
    /// untouched; there is no automatic retry.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogClient::fetch_page`] errors.
    pub async fn load_page(&self, skip: u32, take: u32) -> Result<usize> {
        let page = self
            .client
            .fetch_page(skip, take)
            .instrument(store_span("load_page"))
            .await
            .inspect_err(|error| {
                tracing::warn!(%error, skip, take, "page load failed, list unchanged");
            })?;

        let appended = page.len();
        tracing::debug!(count = appended, skip, take, "page received");

        // send_modify keeps the read-modify-write atomic under concurrent
        // loads; each resolved page appends exactly once.
        self.products_tx.send_modify(|list| list.extend(page));
        self.refresh_most_expensive();

        Ok(appended)
    }

    /// Loads the first page using the configured default page size.
    ///
    /// # Errors
    ///
    /// Propagates [`load_page`](Self::load_page) errors.
    pub async fn load_first_page(&self) -> Result<usize> {
        self.load_page(0, self.config.page_size).await
    }

    /// Clears the accumulated list, broadcasts the empty state, then reloads
    /// the first default page.
    ///
    /// # Errors
    ///
    /// Propagates the reload error; the empty state has already been
    /// broadcast by then.
    pub async fn reset(&self) -> Result<usize> {
        self.products_tx.send_replace(Vec::new());
        self.most_expensive_tx.send_replace(None);
        self.load_first_page().await
    }

    /// Creates a product and resolves with the server-echoed result.
    ///
    /// Does not touch the accumulated list; callers trigger a reload when the
    /// list should reflect the insertion. When
    /// [`StoreConfig::insert_delay_ms`] is set, delivery of the result is
    /// delayed by that amount after the response arrives (demo latency).
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogClient::create_product`] errors.
    pub async fn insert_product(&self, product: &NewProduct) -> Result<Product> {
        let created = self
            .client
            .create_product(product)
            .instrument(store_span("insert_product"))
            .await?;

        if let Some(delay) = self.config.insert_delay() {
            tokio::time::sleep(delay).await;
        }

        Ok(created)
    }

    /// Deletes the product with the given id.
    ///
    /// Does not touch the accumulated list.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogClient::delete_product`] errors.
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        self.client
            .delete_product(id)
            .instrument(store_span("delete_product"))
            .await
    }

    fn refresh_most_expensive(&self) {
        let current = most_expensive(&self.products_tx.borrow()).cloned();
        self.most_expensive_tx.send_replace(current);
    }
}
