//! # ActorEntity Trait
//!
//! The contract every resource (product, service, customer, invoice, draft) implements
//! to be managed by a [`ResourceActor`](crate::ResourceActor). Associated types pin down
//! the identifier, the create/update DTOs, the custom actions and the error type, so a
//! product payload can never be sent to a draft actor.
//!
//! Lifecycle hooks (`on_create`, `on_delete`) have default no-op implementations.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they may call other actors. The `Context` associated type is
/// injected into every hook when the actor is started (`run(context)`), not when it is
/// constructed. This lets actors that depend on each other be created in any order.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier for this entity. Built from the actor's `u32` counter on create.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `ReserveStock`, `AddItem`).
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per resource. It must be `'static` so it can be boxed into
    /// [`FrameworkError::EntityError`](crate::FrameworkError) and downcast on the way out.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its new id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the entity is stored.
    /// Returning an error aborts the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the entity is removed. Returning an error keeps it stored.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
