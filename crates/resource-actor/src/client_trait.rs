//! # ActorClient Trait
//!
//! Shared surface for resource-specific clients. A domain client implements `inner` and
//! `map_error` and inherits `get`, `exists` and `delete`.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read/delete operations.
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Shelf { id: u32, units: u32 }
/// #[derive(Debug)] struct ShelfCreate { units: u32 }
/// #[derive(Debug)] enum ShelfAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct ShelfError(String);
///
/// impl From<String> for ShelfError {
///     fn from(s: String) -> Self { ShelfError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Shelf {
///     type Id = u32;
///     type Create = ShelfCreate;
///     type Update = ();
///     type Action = ShelfAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = ShelfError;
///
///     fn from_create_params(id: u32, p: ShelfCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, units: p.units })
///     }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: ShelfAction, _: &()) -> Result<(), Self::Error> {
///         match a {}
///     }
/// }
///
/// struct ShelfClient { inner: ResourceClient<Shelf> }
///
/// #[async_trait]
/// impl ActorClient<Shelf> for ShelfClient {
///     type Error = ShelfError;
///     fn inner(&self) -> &ResourceClient<Shelf> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { ShelfError(e.to_string()) }
/// }
///
/// async fn usage(client: ShelfClient) {
///     let _ = client.get(1).await;
///     let _ = client.exists(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic `ResourceClient`.
    fn inner(&self) -> &ResourceClient<T>;

    /// Maps framework errors to the resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetches an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// True when an entity with this id is stored.
    #[tracing::instrument(skip(self))]
    async fn exists(&self, id: T::Id) -> Result<bool, Self::Error> {
        Ok(self.get(id).await?.is_some())
    }

    /// Deletes an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
