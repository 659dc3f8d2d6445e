//! # Invoice Client
//!
//! Saving goes through `create`; stock reservation and the customer check happen in
//! the invoice actor's `on_create` hook.

use crate::invoice_actor::InvoiceError;
use crate::model::{Invoice, InvoiceId, InvoiceStatus, InvoiceSubmission, InvoiceUpdate, SaveResponse};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct InvoiceClient {
    inner: ResourceClient<Invoice>,
}

impl InvoiceClient {
    pub fn new(inner: ResourceClient<Invoice>) -> Self {
        Self { inner }
    }

    /// Saves an invoice.
    ///
    /// A rejection by the store comes back as `Ok(SaveResponse::Failed)` carrying its
    /// message. `Err` means the store could not be reached.
    #[instrument(skip(self, submission), fields(customer_id = %submission.customer_id, items = submission.items.len()))]
    pub async fn save(&self, submission: InvoiceSubmission) -> Result<SaveResponse, InvoiceError> {
        debug!("Sending request");
        match self.inner.create(submission).await {
            Ok(invoice_id) => Ok(SaveResponse::Saved { invoice_id }),
            Err(e) => match e.into_entity::<InvoiceError>() {
                Ok(rejection) => {
                    warn!(error = %rejection, "Invoice rejected");
                    Ok(SaveResponse::Failed {
                        message: rejection.to_string(),
                    })
                }
                Err(e) => Err(InvoiceError::ActorCommunicationError(e.to_string())),
            },
        }
    }

    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: InvoiceId,
        status: InvoiceStatus,
    ) -> Result<Invoice, InvoiceError> {
        debug!("Sending request");
        let update = InvoiceUpdate {
            status: Some(status),
            ..InvoiceUpdate::default()
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Invoice> for InvoiceClient {
    type Error = InvoiceError;

    fn inner(&self) -> &ResourceClient<Invoice> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => InvoiceError::NotFound(id),
            other => other
                .into_entity::<InvoiceError>()
                .unwrap_or_else(|e| InvoiceError::ActorCommunicationError(e.to_string())),
        }
    }
}
