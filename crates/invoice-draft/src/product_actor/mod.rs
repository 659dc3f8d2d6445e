//! # Product Actor
//!
//! Owns the product catalog and its stock levels.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock management
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Current stock level (read-only)
//! let stock = product_client.check_stock(product_id).await?;
//!
//! // Take stock when an invoice is saved; fails if not enough is left
//! product_client.reserve_stock(product_id, 2).await?;
//!
//! // Put it back when a later step of the save fails
//! product_client.release_stock(product_id, 2).await?;
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use invoice_draft::product_actor;
//! use invoice_draft::clients::ProductClient;
//! use invoice_draft::model::ProductCreate;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate {
//!             name: "Silver Chain".to_string(),
//!             price: Decimal::new(4999, 2),
//!             quantity: 10,
//!         })
//!         .await?;
//!
//!     client.reserve_stock(id, 3).await?;
//!     assert_eq!(client.check_stock(id).await?, 7);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
