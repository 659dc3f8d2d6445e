//! # Framework Errors
//!
//! Errors raised by the runtime itself, plus a carrier for the entity's own error type.
//! Entity errors travel boxed through the actor channel; typed clients recover them
//! with [`FrameworkError::into_entity`].

use std::error::Error;

/// Errors that can occur within the actor runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity error so it can cross the actor channel.
    pub fn entity<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }

    /// Recovers the concrete entity error, if this is one of type `E`.
    ///
    /// Any other variant (or an entity error of a different type) is handed back unchanged.
    pub fn into_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(boxed) => match boxed.downcast::<E>() {
                Ok(error) => Ok(*error),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}
