//! # storefront-client
//!
//! Data-access client for the storefront product catalog.
//!
//! This crate binds an async REST client to a reactive value holder:
//!
//! - **Paginated loading**: successive catalog pages accumulate into one
//!   in-memory list, in completion order.
//! - **Reactive broadcast**: the full list and the most expensive product are
//!   published through [`tokio::sync::watch`] channels; late subscribers see
//!   the latest value without re-issuing any request.
//! - **Catalog mutations**: create and delete passthrough calls. Neither
//!   mutates the accumulated list; callers decide when to reload.
//!
//! ## Example
//!
//! ```rust,ignore
//! use storefront_client::{ProductStore, StoreConfig};
//!
//! let store = ProductStore::new(StoreConfig::default())?;
//! let mut products = store.products();
//!
//! store.load_first_page().await?;
//! println!("{} products loaded", products.borrow_and_update().len());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod product;
pub mod store;

// Re-export main types at crate root
pub use client::CatalogClient;
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use product::{NewProduct, Product, most_expensive};
pub use store::ProductStore;
