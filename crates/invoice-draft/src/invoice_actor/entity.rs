//! [`ActorEntity`] implementation for [`Invoice`].

use super::error::InvoiceError;
use crate::clients::{CustomerClient, ProductClient};
use crate::model::{
    Invoice, InvoiceId, InvoiceStatus, InvoiceSubmission, InvoiceUpdate, ItemKind, ProductId,
};
use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity};
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Invoice {
    type Id = InvoiceId;
    type Create = InvoiceSubmission;
    type Update = InvoiceUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = (CustomerClient, ProductClient);
    type Error = InvoiceError;

    /// Checks the line items and assigns the invoice number. Status starts as `pending`.
    fn from_create_params(id: InvoiceId, params: InvoiceSubmission) -> Result<Self, InvoiceError> {
        if params.items.is_empty() {
            return Err(InvoiceError::NoItems);
        }
        for item in &params.items {
            if item.key().is_none() {
                return Err(InvoiceError::InvalidItem(format!(
                    "line has neither a product nor a service id: {item:?}"
                )));
            }
            if item.quantity == 0 {
                return Err(InvoiceError::InvalidItem("quantity must be positive".into()));
            }
        }

        Ok(Self {
            id,
            invoice_number: Invoice::number_for(id, params.issue_date),
            customer_id: params.customer_id,
            issue_date: params.issue_date,
            due_date: params.due_date,
            notes: params.notes,
            total_amount: params.total_amount,
            tax_amount: params.tax_amount,
            discount: params.discount,
            final_amount: params.final_amount,
            status: InvoiceStatus::Pending,
            items: params.items,
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), InvoiceError> {
        let (customers, products) = ctx;

        let known = customers
            .exists(self.customer_id)
            .await
            .map_err(|e| InvoiceError::DependencyError(e.to_string()))?;
        if !known {
            return Err(InvoiceError::UnknownCustomer(self.customer_id.to_string()));
        }

        let mut reserved: Vec<(ProductId, u32)> = Vec::new();
        for item in &self.items {
            let Some(key) = item.key() else { continue };
            if key.kind != ItemKind::Product {
                continue;
            }
            let product = ProductId(key.id);
            match products.reserve_stock(product, item.quantity).await {
                Ok(_) => reserved.push((product, item.quantity)),
                Err(e) => {
                    release(products, &reserved).await;
                    return Err(InvoiceError::StockUnavailable {
                        product: product.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(invoice_number = %self.invoice_number, reserved = reserved.len(), "Stock reserved");
        Ok(())
    }

    async fn on_update(&mut self, update: InvoiceUpdate, _ctx: &Self::Context) -> Result<(), InvoiceError> {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), InvoiceError> {
        Ok(())
    }
}

async fn release(products: &ProductClient, reserved: &[(ProductId, u32)]) {
    for (product, quantity) in reserved {
        if let Err(e) = products.release_stock(*product, *quantity).await {
            warn!(%product, quantity, error = %e, "Could not release reserved stock");
        }
    }
}
