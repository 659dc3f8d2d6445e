//! Demo: build one invoice end to end and print the draft as it changes.

use chrono::Local;
use invoice_draft::config::AppConfig;
use invoice_draft::lifecycle::{setup_tracing, InvoicingSystem};
use invoice_draft::model::{
    CustomerCreate, CustomerCreateResponse, InvoiceHeader, ItemKey, ProductCreate, ServiceCreate,
};
use invoice_draft::presentation::{render_table, RowRegistry};
use rust_decimal::Decimal;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::load().map_err(|e| e.to_string())?;
    info!(?config, "Starting invoice draft demo");

    let system = InvoicingSystem::with_config(&config);

    // Catalog and customer
    let ring = system
        .product_client
        .create_product(ProductCreate {
            name: "Gold Ring".to_string(),
            price: Decimal::new(100, 0),
            quantity: 10,
        })
        .await
        .map_err(|e| e.to_string())?;
    let engraving = system
        .service_client
        .create_service(ServiceCreate {
            name: "Engraving".to_string(),
            price: Decimal::new(50, 0),
            service_type: "customization".to_string(),
            duration: Some(2),
            requires_deposit: false,
        })
        .await
        .map_err(|e| e.to_string())?;

    let customer_id = match system
        .customer_client
        .submit_form(CustomerCreate {
            name: "Asha Rao".to_string(),
            email: Some("asha@example.com".to_string()),
            phone: Some("".to_string()),
            ..CustomerCreate::default()
        })
        .await
    {
        CustomerCreateResponse::Success { customer, .. } => customer.id,
        CustomerCreateResponse::Error { message } => return Err(message),
    };

    // Build the draft
    let span = tracing::info_span!("draft_flow");
    let invoice_id = async {
        let drafts = &system.draft_client;
        let draft = drafts.create_draft().await.map_err(|e| e.to_string())?;
        let mut rows = RowRegistry::with_dom_ids();

        let steps = [
            drafts.add_item_input(draft, ItemKey::product(ring), "2").await,
            drafts.add_item_input(draft, ItemKey::service(engraving), "1").await,
            drafts.add_item_input(draft, ItemKey::product(ring), "1").await,
            // more than the 10 in stock; rejected, draft unchanged
            drafts.add_item_input(draft, ItemKey::product(ring), "9").await,
            drafts.set_discount(draft, "50").await,
        ];
        for step in steps {
            match step {
                Ok(view) => {
                    for op in rows.apply(&view) {
                        info!(?op, "Row update");
                    }
                }
                Err(e) => warn!(error = %e, "Rejected"),
            }
        }

        let view = drafts.view(draft).await.map_err(|e| e.to_string())?;
        println!("{}", render_table(&view, &config.currency_symbol));

        let header = InvoiceHeader {
            customer_id,
            issue_date: Local::now().date_naive(),
            due_date: None,
            notes: "Collect on Friday".to_string(),
        };
        drafts.submit(draft, header).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let stock = system
        .product_client
        .check_stock(ring)
        .await
        .map_err(|e| e.to_string())?;
    info!(%invoice_id, stock_left = stock, "Invoice saved");

    system.shutdown().await
}
