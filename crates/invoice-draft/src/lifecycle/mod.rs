//! # Lifecycle
//!
//! Starts every actor, wires their dependencies and shuts them down.
//!
//! | Actor | Context |
//! |---|---|
//! | Product, Service, Customer | `()` |
//! | Invoice | `(CustomerClient, ProductClient)` |
//! | Draft | [`DraftContext`](crate::draft_actor::DraftContext) (catalog + invoice store) |

pub mod invoicing_system;
pub mod tracing;

pub use invoicing_system::InvoicingSystem;
pub use self::tracing::setup_tracing;
