//! # Generic Actor Server
//!
//! [`ResourceActor`] owns the store for one entity type and drains its request channel
//! one message at a time. Because the store is only ever touched from inside the run
//! loop, no `Mutex` or `RwLock` is needed: two requests for the same entity can never
//! interleave their mutations.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The server half of a resource actor.
///
/// Usage is always the same three steps:
///
/// 1. `ResourceActor::new(buffer)` returns the actor and a cloneable client.
/// 2. `actor.run(context)` injects dependencies (other clients).
/// 3. The run future is spawned on Tokio; the client is handed to callers.
///
/// Ids are assigned from an internal `u32` counter starting at 1 and converted with
/// `T::Id::from`.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` bounds the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "invoice_draft::model::catalog::Product"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg, &context, entity_type).await;
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn handle(&mut self, msg: ResourceRequest<T>, context: &T::Context, entity_type: &str) {
        match msg {
            ResourceRequest::Create { params, respond_to } => {
                debug!(entity_type, ?params, "Create");
                let _ = respond_to.send(self.create(params, context, entity_type).await);
            }
            ResourceRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                debug!(entity_type, %id, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(entity_type, %id, ?update, "Update");
                let result = match self.store.get_mut(&id) {
                    Some(item) => match item.on_update(update, context).await {
                        Ok(()) => {
                            info!(entity_type, %id, "Updated");
                            Ok(item.clone())
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            Err(FrameworkError::entity(e))
                        }
                    },
                    None => Err(not_found(entity_type, &id)),
                };
                let _ = respond_to.send(result);
            }
            ResourceRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                let result = match self.store.get(&id) {
                    Some(item) => match item.on_delete(context).await {
                        Ok(()) => {
                            self.store.remove(&id);
                            info!(entity_type, %id, size = self.store.len(), "Deleted");
                            Ok(())
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            Err(FrameworkError::entity(e))
                        }
                    },
                    None => Err(not_found(entity_type, &id)),
                };
                let _ = respond_to.send(result);
            }
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            } => {
                debug!(entity_type, %id, ?action, "Action");
                let result = match self.store.get_mut(&id) {
                    Some(item) => {
                        let result = item
                            .handle_action(action, context)
                            .await
                            .map_err(FrameworkError::entity);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        result
                    }
                    None => Err(not_found(entity_type, &id)),
                };
                let _ = respond_to.send(result);
            }
        }
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T::Id, FrameworkError> {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::entity(e)
        })?;
        item.on_create(context).await.map_err(|e| {
            warn!(entity_type, error = %e, "on_create failed");
            FrameworkError::entity(e)
        })?;

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }
}

fn not_found<I: std::fmt::Display>(entity_type: &str, id: &I) -> FrameworkError {
    warn!(entity_type, %id, "Not found");
    FrameworkError::NotFound(id.to_string())
}
