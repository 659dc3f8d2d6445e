//! Draft mutation rules, free of any actor or I/O.
//!
//! Every mutation validates first and changes state only once nothing can fail, so a
//! rejected call leaves the draft exactly as it was. Totals are never stored; they are
//! recomputed from `items` and `discount` on each read.

use super::error::DraftError;
use crate::model::{
    CatalogEntry, DiscountInput, DraftId, DraftTotals, DraftView, InvoiceDraft, InvoiceHeader,
    InvoiceSubmission, ItemKey, ItemKind, LineItem, LineItemPayload, RowChange, MAX_AMOUNT,
    TAX_RATE,
};
use rust_decimal::Decimal;

/// Parses a quantity typed into the form: a trimmed integer greater than zero.
pub fn parse_quantity(raw: &str) -> Result<u32, DraftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DraftError::Validation("Please enter a quantity".into()));
    }
    match raw.parse::<i64>() {
        Ok(quantity) if quantity > 0 => u32::try_from(quantity)
            .map_err(|_| DraftError::Validation(format!("Quantity too large: {quantity}"))),
        Ok(_) => Err(DraftError::Validation(
            "Quantity must be greater than zero".into(),
        )),
        Err(_) => Err(DraftError::Validation(format!("Invalid quantity: {raw}"))),
    }
}

fn within_limit(amount: Option<Decimal>) -> Option<Decimal> {
    amount.filter(|amount| amount.abs() <= MAX_AMOUNT)
}

impl InvoiceDraft {
    pub fn new(id: DraftId) -> Self {
        Self {
            id,
            items: Vec::new(),
            discount: Decimal::ZERO,
        }
    }

    /// Adds `quantity` units of a freshly looked-up catalog entry.
    ///
    /// An existing line for the same key is merged: its quantity grows and it keeps the
    /// name and price of the first pick. For products the merged quantity must stay
    /// within `available_quantity`. The line total and the subtotal must stay within
    /// [`MAX_AMOUNT`].
    pub fn add_entry(&mut self, entry: CatalogEntry, quantity: u32) -> Result<RowChange, DraftError> {
        if quantity == 0 {
            return Err(DraftError::Validation(
                "Quantity must be greater than zero".into(),
            ));
        }

        let key = entry.key;
        let position = self.items.iter().position(|item| item.key == key);
        let (current, unit_price) = position.map_or((0, entry.unit_price), |index| {
            (self.items[index].quantity, self.items[index].unit_price)
        });
        let requested = current
            .checked_add(quantity)
            .ok_or_else(|| DraftError::Validation(format!("Quantity too large for {key}")))?;

        if let Some(available) = entry.available_quantity {
            if requested > available {
                return Err(DraftError::InsufficientStock {
                    key,
                    requested,
                    available,
                });
            }
        }

        let line_total = unit_price.checked_mul(Decimal::from(requested));
        let subtotal = within_limit(line_total).and_then(|line_total| {
            self.items
                .iter()
                .filter(|item| item.key != key)
                .try_fold(line_total, |acc, item| {
                    within_limit(acc.checked_add(item.line_total()))
                })
        });
        if subtotal.is_none() {
            return Err(DraftError::Validation(format!(
                "Amount too large for {key}"
            )));
        }

        match position {
            Some(index) => {
                self.items[index].quantity = requested;
                Ok(RowChange::Updated(key))
            }
            None => {
                self.items.push(LineItem {
                    key,
                    name: entry.name,
                    unit_price,
                    quantity,
                });
                Ok(RowChange::Appended(key))
            }
        }
    }

    /// Removes the line for `key`. Removing an absent key only reports a totals refresh.
    pub fn remove_item(&mut self, key: ItemKey) -> RowChange {
        match self.items.iter().position(|item| item.key == key) {
            Some(index) => {
                self.items.remove(index);
                RowChange::Removed {
                    key,
                    now_empty: self.items.is_empty(),
                }
            }
            None => RowChange::Totals,
        }
    }

    pub fn set_discount(&mut self, input: &DiscountInput) -> RowChange {
        self.discount = input.resolve();
        RowChange::Totals
    }

    /// Tax is charged on `subtotal - discount` and goes negative when the discount
    /// exceeds the subtotal.
    pub fn totals(&self) -> DraftTotals {
        let subtotal = self
            .items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let taxable = subtotal.saturating_sub(self.discount);
        let tax_amount = taxable.saturating_mul(TAX_RATE);
        DraftTotals {
            subtotal,
            discount: self.discount,
            tax_amount,
            total_amount: taxable.saturating_add(tax_amount),
        }
    }

    pub fn view(&self, change: RowChange) -> DraftView {
        DraftView {
            draft_id: self.id,
            items: self.items.clone(),
            totals: self.totals(),
            change,
        }
    }

    /// One save-request line per draft line, in draft order.
    pub fn to_submission_payload(&self) -> Result<Vec<LineItemPayload>, DraftError> {
        if self.items.is_empty() {
            return Err(DraftError::Validation(
                "Please add at least one item to the invoice".into(),
            ));
        }
        Ok(self
            .items
            .iter()
            .map(|item| match item.kind() {
                ItemKind::Product => {
                    LineItemPayload::product(item.key.id, item.quantity, item.unit_price)
                }
                ItemKind::Service => {
                    LineItemPayload::service(item.key.id, item.quantity, item.unit_price)
                }
            })
            .collect())
    }

    /// The full save request. `total_amount` is the subtotal and `final_amount` the total.
    pub fn to_submission(&self, header: InvoiceHeader) -> Result<InvoiceSubmission, DraftError> {
        let items = self.to_submission_payload()?;
        let totals = self.totals();
        Ok(InvoiceSubmission {
            customer_id: header.customer_id,
            issue_date: header.issue_date,
            due_date: header.due_date,
            notes: header.notes,
            total_amount: totals.subtotal,
            tax_amount: totals.tax_amount,
            discount: totals.discount,
            final_amount: totals.total_amount,
            items,
        })
    }
}
