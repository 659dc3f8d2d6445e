//! Typed clients over the generic [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each client maps [`FrameworkError`](resource_actor::FrameworkError) back into its
//! resource's own error enum, recovering the entity error when the actor rejected the
//! request and falling back to `ActorCommunicationError` when the actor was unreachable.

pub mod catalog_client;
pub mod customer_client;
pub mod draft_client;
pub mod invoice_client;
pub mod product_client;
pub mod service_client;

pub use catalog_client::{CatalogClient, CatalogError};
pub use customer_client::CustomerClient;
pub use draft_client::DraftClient;
pub use invoice_client::InvoiceClient;
pub use product_client::ProductClient;
pub use service_client::ServiceClient;
