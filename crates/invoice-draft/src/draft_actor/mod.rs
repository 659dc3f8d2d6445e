//! # Draft Actor
//!
//! Holds invoices that are still being assembled. One draft is created when the
//! invoice form opens and is deleted when the user navigates away or submits.
//!
//! ## Structure
//!
//! - [`builder`] - the pure line-item rules: merge, stock ceiling, totals, payload
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation, adding
//!   catalog lookups and submission through [`DraftContext`]
//! - [`actions`] - [`DraftAction`] and [`DraftActionResult`]
//! - [`error`] - [`DraftError`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let draft = draft_client.create_draft().await?;
//! let view = draft_client.add_item(draft, ItemKey::product(ring), 2).await?;
//! let view = draft_client.set_discount(draft, "50").await?;
//! let invoice_id = draft_client.submit(draft, header).await?;
//! ```

pub mod actions;
pub mod builder;
pub mod entity;
pub mod error;

pub use actions::*;
pub use builder::parse_quantity;
pub use entity::DraftContext;
pub use error::*;

use crate::model::InvoiceDraft;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Draft actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<InvoiceDraft>, ResourceClient<InvoiceDraft>) {
    ResourceActor::new(buffer_size)
}
