use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("Service not found: {0}")]
    NotFound(String),

    #[error("Invalid service: {0}")]
    InvalidService(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ServiceError {
    fn from(msg: String) -> Self {
        ServiceError::ActorCommunicationError(msg)
    }
}
