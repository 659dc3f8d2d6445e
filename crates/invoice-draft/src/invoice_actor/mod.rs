//! # Invoice Actor
//!
//! The invoice store behind the save endpoint.
//!
//! ## Dependencies
//!
//! Started with `Context = (CustomerClient, ProductClient)`. Creating an invoice:
//!
//! 1. checks that the customer exists,
//! 2. reserves stock for every product line (service lines never touch stock),
//! 3. releases what it already reserved if a later line cannot be reserved.
//!
//! Only then is the invoice stored, so a rejected save leaves stock as it was.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Invoice;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Invoice actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Invoice>, ResourceClient<Invoice>) {
    ResourceActor::new(buffer_size)
}
