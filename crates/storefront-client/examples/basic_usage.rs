//! Basic usage example: load the first catalog page and watch the derived
//! most-expensive product.
//!
//! Run with: `cargo run --example basic_usage`

use storefront_client::observability::{LogFormat, init_logging};
use storefront_client::{ProductStore, Result, StoreConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(LogFormat::Pretty);

    let store = ProductStore::new(StoreConfig::default())?;
    let products = store.products();
    let most_expensive = store.most_expensive();

    let loaded = store.load_first_page().await?;
    println!("loaded {loaded} products");

    for product in products.borrow().iter() {
        println!("  #{} {} ({:.2})", product.id, product.name, product.price);
    }

    if let Some(product) = most_expensive.borrow().as_ref() {
        println!("most expensive: {} ({:.2})", product.name, product.price);
    }

    Ok(())
}
