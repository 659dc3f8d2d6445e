use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvoiceError {
    #[error("Invoice not found: {0}")]
    NotFound(String),

    #[error("At least one item is required")]
    NoItems,

    #[error("Invalid line item: {0}")]
    InvalidItem(String),

    #[error("Customer not found: {0}")]
    UnknownCustomer(String),

    #[error("Could not reserve stock for {product}: {reason}")]
    StockUnavailable { product: String, reason: String },

    /// A collaborator (customer directory or product catalog) failed.
    #[error("Dependency error: {0}")]
    DependencyError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for InvoiceError {
    fn from(msg: String) -> Self {
        InvoiceError::ActorCommunicationError(msg)
    }
}
