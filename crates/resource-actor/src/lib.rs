//! # Resource Actor
//!
//! A small runtime for resource-oriented actors on Tokio.
//!
//! Each resource type (a product catalog, a customer directory, an invoice draft) gets
//! one [`ResourceActor`] that owns its entities and processes requests sequentially.
//! Callers talk to it through a cloneable [`ResourceClient`] with a uniform
//! create / get / update / delete / action API.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the business rules for one resource type, expressed
//!    as lifecycle hooks and a custom action handler.
//! 2. **Runtime** ([`ResourceActor`]): the message loop, id assignment and logging.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed async calls over
//!    `mpsc` + `oneshot` channels.
//!
//! ## Context injection
//!
//! Dependencies are handed to `run(context)` rather than `new()`. All actors can be
//! created first and wired afterwards, so an invoice store can hold a product client
//! and a draft can hold the invoice client without construction-order cycles.
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Shelf { id: u32, units: u32 }
//! #[derive(Debug)] struct ShelfCreate { units: u32 }
//! #[derive(Debug)] enum ShelfAction { Take(u32) }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("only {0} units left")]
//! struct ShelfError(u32);
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32;
//!     type Create = ShelfCreate;
//!     type Update = ();
//!     type Action = ShelfAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = ShelfError;
//!
//!     fn from_create_params(id: u32, p: ShelfCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, units: p.units })
//!     }
//!
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!
//!     async fn handle_action(&mut self, a: ShelfAction, _: &()) -> Result<u32, Self::Error> {
//!         let ShelfAction::Take(n) = a;
//!         self.units = self.units.checked_sub(n).ok_or(ShelfError(self.units))?;
//!         Ok(self.units)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shelf>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(ShelfCreate { units: 5 }).await.unwrap();
//!     assert_eq!(client.perform_action(id, ShelfAction::Take(2)).await.unwrap(), 3);
//!
//!     let err = client.perform_action(id, ShelfAction::Take(9)).await.unwrap_err();
//!     assert_eq!(err.into_entity::<ShelfError>().unwrap().0, 3);
//! }
//! ```
//!
//! ## Testing
//!
//! See [`mock`] for client doubles that answer without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
