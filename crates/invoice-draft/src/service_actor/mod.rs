//! # Service Actor
//!
//! Owns the services that can be billed alongside products. Services have no stock,
//! so the actor only offers CRUD.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Service;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Service actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Service>, ResourceClient<Service>) {
    ResourceActor::new(buffer_size)
}
