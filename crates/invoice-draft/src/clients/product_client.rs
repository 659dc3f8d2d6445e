//! # Product Client
//!
//! Wraps a `ResourceClient<Product>` and exposes catalog reads and stock operations.

use crate::model::{Product, ProductCreate, ProductDetails, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => other
                .into_entity::<ProductError>()
                .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// The lookup the invoice form performs when a product is picked.
    ///
    /// `Ok(None)` means no such product.
    #[instrument(skip(self))]
    pub async fn details(&self, id: ProductId) -> Result<Option<ProductDetails>, ProductError> {
        Ok(self.get(id).await?.as_ref().map(ProductDetails::from))
    }

    /// Returns the quantity in stock.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected("CheckStock", other)),
        }
    }

    /// Takes `quantity` units out of stock and returns what is left.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Reserving stock");
        match self
            .inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::ReserveStock(left) => Ok(left),
            other => Err(unexpected("ReserveStock", other)),
        }
    }

    /// Puts `quantity` units back into stock and returns the new level.
    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Releasing stock");
        match self
            .inner
            .perform_action(id, ProductAction::ReleaseStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::ReleaseStock(level) => Ok(level),
            other => Err(unexpected("ReleaseStock", other)),
        }
    }
}

fn unexpected(action: &str, result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!(
        "{action} answered with mismatched result {result:?}"
    ))
}
