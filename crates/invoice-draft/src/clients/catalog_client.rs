//! # Catalog Client
//!
//! The single lookup a draft performs when an item is picked: current name, price and,
//! for products, availability. Products and services live in separate actors; the key's
//! kind decides which one is asked.

use super::{ProductClient, ServiceClient};
use crate::model::{CatalogEntry, ItemKey, ItemKind, ProductId, ServiceId};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("{0} not found")]
    NotFound(ItemKey),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone)]
pub struct CatalogClient {
    products: ProductClient,
    services: ServiceClient,
}

impl CatalogClient {
    pub fn new(products: ProductClient, services: ServiceClient) -> Self {
        Self { products, services }
    }

    #[instrument(skip(self))]
    pub async fn lookup(&self, key: ItemKey) -> Result<CatalogEntry, CatalogError> {
        debug!("Looking up catalog entry");
        let entry = match key.kind {
            ItemKind::Product => self
                .products
                .details(ProductId(key.id))
                .await
                .map_err(|e| CatalogError::Unavailable(e.to_string()))?
                .map(CatalogEntry::from),
            ItemKind::Service => self
                .services
                .details(ServiceId(key.id))
                .await
                .map_err(|e| CatalogError::Unavailable(e.to_string()))?
                .map(CatalogEntry::from),
        };
        entry.ok_or(CatalogError::NotFound(key))
    }
}
