//! # Draft Client
//!
//! The API the invoice form drives. Every mutation answers with a fresh
//! [`DraftView`]: the lines, the totals and which row changed.

use crate::draft_actor::{parse_quantity, DraftAction, DraftActionResult, DraftError};
use crate::model::{
    DiscountInput, DraftCreate, DraftId, DraftView, InvoiceDraft, InvoiceHeader, InvoiceId, ItemKey,
    LineItemPayload,
};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct DraftClient {
    inner: ResourceClient<InvoiceDraft>,
}

impl DraftClient {
    pub fn new(inner: ResourceClient<InvoiceDraft>) -> Self {
        Self { inner }
    }

    /// Starts an empty draft.
    #[instrument(skip(self))]
    pub async fn create_draft(&self) -> Result<DraftId, DraftError> {
        debug!("Sending request");
        self.inner.create(DraftCreate).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        id: DraftId,
        key: ItemKey,
        quantity: u32,
    ) -> Result<DraftView, DraftError> {
        self.view_action(id, DraftAction::AddItem { key, quantity })
            .await
    }

    /// Like [`add_item`](Self::add_item), with the quantity as typed into the form.
    #[instrument(skip(self))]
    pub async fn add_item_input(
        &self,
        id: DraftId,
        key: ItemKey,
        raw_quantity: &str,
    ) -> Result<DraftView, DraftError> {
        let quantity = parse_quantity(raw_quantity)?;
        self.add_item(id, key, quantity).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: DraftId, key: ItemKey) -> Result<DraftView, DraftError> {
        self.view_action(id, DraftAction::RemoveItem(key)).await
    }

    /// Accepts `"50"`, `"abc"` or a `Decimal`. Unusable input counts as zero.
    #[instrument(skip(self, discount))]
    pub async fn set_discount(
        &self,
        id: DraftId,
        discount: impl Into<DiscountInput>,
    ) -> Result<DraftView, DraftError> {
        self.view_action(id, DraftAction::SetDiscount(discount.into()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn view(&self, id: DraftId) -> Result<DraftView, DraftError> {
        self.view_action(id, DraftAction::View).await
    }

    #[instrument(skip(self))]
    pub async fn payload(&self, id: DraftId) -> Result<Vec<LineItemPayload>, DraftError> {
        match self.action(id, DraftAction::Payload).await? {
            DraftActionResult::Payload(items) => Ok(items),
            other => Err(unexpected("Payload", &other)),
        }
    }

    /// Saves the draft as an invoice.
    ///
    /// Whatever the store answers, the draft is then deleted; a failed save is not
    /// retried. The exception is an empty draft, which stays open for more items.
    #[instrument(skip(self, header))]
    pub async fn submit(&self, id: DraftId, header: InvoiceHeader) -> Result<InvoiceId, DraftError> {
        debug!("Submitting draft");
        let result = match self.action(id, DraftAction::Submit(header)).await {
            Ok(DraftActionResult::Submit(invoice_id)) => Ok(invoice_id),
            Ok(other) => Err(unexpected("Submit", &other)),
            Err(e) => Err(e),
        };

        if !matches!(
            result,
            Err(DraftError::Validation(_)) | Err(DraftError::NotFound(_))
        ) {
            if let Err(e) = self.inner.delete(id).await {
                warn!(error = %e, "Could not discard submitted draft");
            }
        }
        result
    }

    /// Drops the draft without saving.
    #[instrument(skip(self))]
    pub async fn discard(&self, id: DraftId) -> Result<(), DraftError> {
        self.delete(id).await
    }

    async fn action(&self, id: DraftId, action: DraftAction) -> Result<DraftActionResult, DraftError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    async fn view_action(&self, id: DraftId, action: DraftAction) -> Result<DraftView, DraftError> {
        self.action(id, action)
            .await?
            .into_view()
            .map_err(|other| unexpected("View", &other))
    }
}

fn unexpected(action: &str, result: &DraftActionResult) -> DraftError {
    DraftError::ActorCommunicationError(format!(
        "{action} answered with mismatched result {result:?}"
    ))
}

#[async_trait]
impl ActorClient<InvoiceDraft> for DraftClient {
    type Error = DraftError;

    fn inner(&self) -> &ResourceClient<InvoiceDraft> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => DraftError::NotFound(id),
            other => other
                .into_entity::<DraftError>()
                .unwrap_or_else(|e| DraftError::ActorCommunicationError(e.to_string())),
        }
    }
}
