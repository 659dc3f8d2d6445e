use crate::clients::{
    CatalogClient, CustomerClient, DraftClient, InvoiceClient, ProductClient, ServiceClient,
};
use crate::config::AppConfig;
use crate::draft_actor::DraftContext;
use tracing::{error, info, warn};

/// Owns the running actors and the clients to reach them.
///
/// ```ignore
/// let system = InvoicingSystem::new();
///
/// let ring = system.product_client.create_product(ring_params).await?;
/// let draft = system.draft_client.create_draft().await?;
/// system.draft_client.add_item(draft, ItemKey::product(ring), 2).await?;
///
/// system.shutdown().await?;
/// ```
pub struct InvoicingSystem {
    pub product_client: ProductClient,
    pub service_client: ServiceClient,
    pub customer_client: CustomerClient,
    pub invoice_client: InvoiceClient,
    pub draft_client: DraftClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InvoicingSystem {
    /// Starts every actor with default settings. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    /// A `channel_buffer` of zero is raised to one.
    pub fn with_config(config: &AppConfig) -> Self {
        if config.channel_buffer == 0 {
            warn!("channel_buffer must be greater than zero, using 1");
        }
        let buffer = config.channel_buffer.max(1);

        // 1. Create actors (no dependencies yet)
        let (product_actor, product_client) = crate::product_actor::new(buffer);
        let (service_actor, service_client) = crate::service_actor::new(buffer);
        let (customer_actor, customer_client) = crate::customer_actor::new(buffer);
        let (invoice_actor, invoice_client) = crate::invoice_actor::new(buffer);
        let (draft_actor, draft_client) = crate::draft_actor::new(buffer);

        let product_client = ProductClient::new(product_client);
        let service_client = ServiceClient::new(service_client);
        let customer_client = CustomerClient::new(customer_client);
        let invoice_client = InvoiceClient::new(invoice_client);
        let draft_client = DraftClient::new(draft_client);

        // 2. Start actors with injected context
        let product_handle = tokio::spawn(product_actor.run(()));
        let service_handle = tokio::spawn(service_actor.run(()));
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let invoice_handle =
            tokio::spawn(invoice_actor.run((customer_client.clone(), product_client.clone())));
        let draft_handle = tokio::spawn(draft_actor.run(DraftContext {
            catalog: CatalogClient::new(product_client.clone(), service_client.clone()),
            invoices: invoice_client.clone(),
        }));

        info!(buffer, "Invoicing system started");

        Self {
            product_client,
            service_client,
            customer_client,
            invoice_client,
            draft_client,
            handles: vec![
                draft_handle,
                invoice_handle,
                customer_handle,
                service_handle,
                product_handle,
            ],
        }
    }

    /// Drops every client and waits for the actors to drain and exit.
    ///
    /// Actors holding clients of other actors (draft, invoice) exit first and release
    /// them, so the catalog and customer actors finish once their last client is gone.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.draft_client);
        drop(self.invoice_client);
        drop(self.customer_client);
        drop(self.service_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for InvoicingSystem {
    fn default() -> Self {
        Self::new()
    }
}
