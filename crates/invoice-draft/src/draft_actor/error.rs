//! Error types for the Draft actor.

use crate::clients::CatalogError;
use crate::model::ItemKey;
use thiserror::Error;

/// Errors from draft mutations and submission.
///
/// A rejected mutation never changes the draft.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    #[error("Draft not found: {0}")]
    NotFound(String),

    /// Bad quantity input, or submitting an empty draft.
    #[error("{0}")]
    Validation(String),

    /// `requested` is the line's quantity after the merge, not just the increment.
    #[error("Cannot add {key}: requested {requested}, only {available} available")]
    InsufficientStock {
        key: ItemKey,
        requested: u32,
        available: u32,
    },

    #[error("Lookup failed: {0}")]
    Lookup(#[from] CatalogError),

    /// The invoice store rejected the save or could not be reached.
    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for DraftError {
    fn from(msg: String) -> Self {
        DraftError::ActorCommunicationError(msg)
    }
}
