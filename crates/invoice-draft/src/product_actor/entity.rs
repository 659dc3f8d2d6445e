//! [`ActorEntity`] implementation for [`Product`].

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    /// Creates a new Product from creation parameters.
    ///
    /// The name must not be blank and the price must not be negative.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(ProductError::InvalidProduct("name is required".into()));
        }
        if params.price.is_sign_negative() {
            return Err(ProductError::InvalidProduct(format!(
                "price must not be negative, got {}",
                params.price
            )));
        }
        Ok(Self::new(id, name, params.price, params.quantity))
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(price) = update.price {
            if price.is_sign_negative() {
                return Err(ProductError::InvalidProduct(format!(
                    "price must not be negative, got {price}"
                )));
            }
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    /// # Actions
    /// - `CheckStock`: returns the current stock level
    /// - `ReserveStock`: decrements stock if enough is left, returns the new level
    /// - `ReleaseStock`: increments stock, returns the new level
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
            ProductAction::ReserveStock(0) | ProductAction::ReleaseStock(0) => {
                Err(ProductError::InvalidQuantity(0))
            }
            ProductAction::ReserveStock(requested) => {
                if requested > self.quantity {
                    return Err(ProductError::InsufficientStock {
                        requested,
                        available: self.quantity,
                    });
                }
                self.quantity -= requested;
                Ok(ProductActionResult::ReserveStock(self.quantity))
            }
            ProductAction::ReleaseStock(units) => {
                self.quantity = self.quantity.saturating_add(units);
                Ok(ProductActionResult::ReleaseStock(self.quantity))
            }
        }
    }
}
