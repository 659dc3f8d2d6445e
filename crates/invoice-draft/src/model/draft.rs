//! The invoice being assembled before it is saved.
//!
//! [`InvoiceDraft`] implements [`ActorEntity`](resource_actor::ActorEntity), so each
//! draft lives in the draft [`ResourceActor`](resource_actor::ResourceActor). The pure
//! mutation rules live in [`crate::draft_actor::builder`]; the actor adds catalog
//! lookups and submission on top.

use super::catalog::{ItemKey, ItemKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Drafts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(pub u32);

impl From<u32> for DraftId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "draft_{}", self.0)
    }
}

/// One product or service on the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub key: ItemKey,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    pub fn kind(&self) -> ItemKind {
        self.key.kind
    }

    /// Saturates instead of overflowing.
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceDraft {
    pub id: DraftId,
    /// Insertion-ordered, unique by key.
    pub items: Vec<LineItem>,
    pub discount: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct DraftCreate;

/// Figures derived from the current items and discount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

/// Which row a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChange {
    Appended(ItemKey),
    Updated(ItemKey),
    /// `now_empty` is set when the last line went away.
    Removed { key: ItemKey, now_empty: bool },
    /// Only the summary figures changed.
    Totals,
}

/// Snapshot handed to the presentation layer after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftView {
    pub draft_id: DraftId,
    pub items: Vec<LineItem>,
    pub totals: DraftTotals,
    pub change: RowChange,
}

impl DraftView {
    pub fn subtotal(&self) -> Decimal {
        self.totals.subtotal
    }

    pub fn tax_amount(&self) -> Decimal {
        self.totals.tax_amount
    }

    pub fn total_amount(&self) -> Decimal {
        self.totals.total_amount
    }

    pub fn line(&self, key: ItemKey) -> Option<&LineItem> {
        self.items.iter().find(|item| item.key == key)
    }
}
