//! # Customer Actor
//!
//! The customer directory. Creating a customer validates the form input; the invoice
//! store reads from here to check that an invoice's customer exists.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Customer;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(buffer_size)
}
