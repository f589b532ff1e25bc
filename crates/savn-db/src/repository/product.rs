//! # Product Repository
//!
//! The product list, stored as one JSON array under `"products"` in
//! insertion order.

use savn_core::Product;
use tracing::debug;

use super::kv::KeyValueRepository;
use super::PRODUCTS_KEY;
use crate::error::DbResult;

/// Repository for the persisted product list.
///
/// ## Usage
/// ```rust,ignore
/// let products = db.products().load().await?;
/// db.products().save(&products).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    kv: KeyValueRepository,
}

impl ProductRepository {
    pub fn new(kv: KeyValueRepository) -> Self {
        ProductRepository { kv }
    }

    /// Loads all products. A missing key loads as an empty list.
    pub async fn load(&self) -> DbResult<Vec<Product>> {
        let products: Vec<Product> = self.kv.get_json(PRODUCTS_KEY).await?.unwrap_or_default();

        debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    /// Replaces the stored product list.
    pub async fn save(&self, products: &[Product]) -> DbResult<()> {
        debug!(count = products.len(), "Saving products");
        self.kv.put_json(PRODUCTS_KEY, products).await
    }

    /// Removes the stored product list.
    pub async fn clear(&self) -> DbResult<()> {
        debug!("Clearing products");
        self.kv.delete(PRODUCTS_KEY).await?;
        Ok(())
    }
}
