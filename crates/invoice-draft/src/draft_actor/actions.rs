//! Custom actions for the Draft actor.

use crate::model::{DiscountInput, DraftView, InvoiceHeader, InvoiceId, ItemKey, LineItemPayload};

#[derive(Debug, Clone)]
pub enum DraftAction {
    /// Looks the item up in the catalog, then appends it or merges it into its line.
    AddItem { key: ItemKey, quantity: u32 },
    /// No-op when the key is not on the draft.
    RemoveItem(ItemKey),
    SetDiscount(DiscountInput),
    View,
    /// The `items` array of a save request.
    Payload,
    /// Saves the draft as an invoice.
    Submit(InvoiceHeader),
}

/// Results from DraftActions - variants match 1:1 with DraftAction
#[derive(Debug, Clone, PartialEq)]
pub enum DraftActionResult {
    AddItem(DraftView),
    RemoveItem(DraftView),
    SetDiscount(DraftView),
    View(DraftView),
    Payload(Vec<LineItemPayload>),
    Submit(InvoiceId),
}

impl DraftActionResult {
    /// The view carried by the mutating and read actions. Other results are handed back.
    pub fn into_view(self) -> Result<DraftView, Self> {
        match self {
            DraftActionResult::AddItem(view)
            | DraftActionResult::RemoveItem(view)
            | DraftActionResult::SetDiscount(view)
            | DraftActionResult::View(view) => Ok(view),
            other => Err(other),
        }
    }
}
