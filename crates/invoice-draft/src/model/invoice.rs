//! Persisted invoices and the save request that creates them.

use super::catalog::{ItemKey, ItemKind, ProductId};
use super::customer::CustomerId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Invoices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub u32);

impl From<u32> for InvoiceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invoice_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Cancelled,
    Layaway,
}

/// One line of a save request.
///
/// Products carry their id in `product_id`. Services carry `product_id: 0`
/// (the store's "no product" value), `is_service: true` and their id in `service_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemPayload {
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub product_id: u32,
    pub is_service: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<u32>,
}

impl LineItemPayload {
    pub fn product(id: u32, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            total_price: unit_price.saturating_mul(Decimal::from(quantity)),
            product_id: id,
            is_service: false,
            service_id: None,
        }
    }

    pub fn service(id: u32, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            total_price: unit_price.saturating_mul(Decimal::from(quantity)),
            product_id: 0,
            is_service: true,
            service_id: Some(id),
        }
    }

    /// The catalog item this line refers to, if it is well formed.
    pub fn key(&self) -> Option<ItemKey> {
        match (self.is_service, self.service_id) {
            (true, Some(id)) => Some(ItemKey {
                kind: ItemKind::Service,
                id,
            }),
            (true, None) => None,
            (false, _) if self.product_id == 0 => None,
            (false, _) => Some(ItemKey::product(ProductId(self.product_id))),
        }
    }
}

/// The parts of a save request the draft does not own.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceHeader {
    pub customer_id: CustomerId,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub notes: String,
}

/// Body of a save request.
///
/// `total_amount` is the pre-discount subtotal and `final_amount` the amount due,
/// matching the store's column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSubmission {
    pub customer_id: CustomerId,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub notes: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_amount: Decimal,
    pub items: Vec<LineItemPayload>,
}

/// Save response: `{"invoice_id": 4}` or `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SaveResponse {
    Saved { invoice_id: InvoiceId },
    Failed { message: String },
}

/// A saved invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub customer_id: CustomerId,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub notes: String,
    pub total_amount: Decimal,
    pub tax_amount: Decimal,
    pub discount: Decimal,
    pub final_amount: Decimal,
    pub status: InvoiceStatus,
    pub items: Vec<LineItemPayload>,
}

impl Invoice {
    pub fn number_for(id: InvoiceId, issue_date: NaiveDate) -> String {
        format!("INV-{}-{:04}", issue_date.format("%Y%m%d"), id.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceUpdate {
    pub status: Option<InvoiceStatus>,
    pub notes: Option<String>,
}
