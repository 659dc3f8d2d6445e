//! [`ActorEntity`] implementation for [`InvoiceDraft`].
//!
//! Catalog lookups and the save call are the only awaits inside an action. The actor
//! handles one request at a time, so two `AddItem`s racing on the same draft are
//! applied one after the other against the latest lines.

use super::actions::{DraftAction, DraftActionResult};
use super::error::DraftError;
use crate::clients::{CatalogClient, InvoiceClient};
use crate::model::{DraftCreate, DraftId, InvoiceDraft, RowChange, SaveResponse};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use tracing::{debug, info};

/// Collaborators a draft talks to.
#[derive(Clone)]
pub struct DraftContext {
    pub catalog: CatalogClient,
    pub invoices: InvoiceClient,
}

#[async_trait]
impl ActorEntity for InvoiceDraft {
    type Id = DraftId;
    type Create = DraftCreate;
    type Update = ();
    type Action = DraftAction;
    type ActionResult = DraftActionResult;
    type Context = DraftContext;
    type Error = DraftError;

    fn from_create_params(id: DraftId, _params: DraftCreate) -> Result<Self, DraftError> {
        Ok(Self::new(id))
    }

    async fn on_update(&mut self, _update: (), _ctx: &DraftContext) -> Result<(), DraftError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DraftAction,
        ctx: &DraftContext,
    ) -> Result<DraftActionResult, DraftError> {
        match action {
            DraftAction::AddItem { key, quantity } => {
                if quantity == 0 {
                    return Err(DraftError::Validation(
                        "Quantity must be greater than zero".into(),
                    ));
                }
                let entry = ctx.catalog.lookup(key).await?;
                debug!(%key, available = ?entry.available_quantity, "Catalog entry fetched");
                let change = self.add_entry(entry, quantity)?;
                Ok(DraftActionResult::AddItem(self.view(change)))
            }
            DraftAction::RemoveItem(key) => {
                let change = self.remove_item(key);
                Ok(DraftActionResult::RemoveItem(self.view(change)))
            }
            DraftAction::SetDiscount(input) => {
                let change = self.set_discount(&input);
                Ok(DraftActionResult::SetDiscount(self.view(change)))
            }
            DraftAction::View => Ok(DraftActionResult::View(self.view(RowChange::Totals))),
            DraftAction::Payload => Ok(DraftActionResult::Payload(self.to_submission_payload()?)),
            DraftAction::Submit(header) => {
                let submission = self.to_submission(header)?;
                match ctx.invoices.save(submission).await {
                    Ok(SaveResponse::Saved { invoice_id }) => {
                        info!(draft = %self.id, %invoice_id, "Draft saved");
                        Ok(DraftActionResult::Submit(invoice_id))
                    }
                    Ok(SaveResponse::Failed { message }) => Err(DraftError::Submission(message)),
                    Err(e) => Err(DraftError::Submission(e.to_string())),
                }
            }
        }
    }
}
