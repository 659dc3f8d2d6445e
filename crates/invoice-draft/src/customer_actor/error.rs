//! Error types for the Customer actor.

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("Customer name is required")]
    NameRequired,

    #[error("Customer name must be at most 100 characters")]
    NameTooLong,

    #[error("Phone number must be at most 20 characters")]
    PhoneTooLong,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CustomerError {
    fn from(msg: String) -> Self {
        CustomerError::ActorCommunicationError(msg)
    }
}
