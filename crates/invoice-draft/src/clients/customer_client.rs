use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerCreateResponse, CustomerId, CustomerSummary};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument, warn};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Creates a customer from the quick-add form and answers in the form's wire shape.
    ///
    /// Failures are reported in the body, never as an `Err`.
    #[instrument(skip(self))]
    pub async fn submit_form(&self, params: CustomerCreate) -> CustomerCreateResponse {
        let name = params.name.trim().to_string();
        match self.create_customer(params).await {
            Ok(id) => CustomerCreateResponse::Success {
                message: "Customer created successfully".to_string(),
                customer: CustomerSummary { id, name },
            },
            Err(e) => {
                warn!(error = %e, "Customer rejected");
                CustomerCreateResponse::Error {
                    message: e.to_string(),
                }
            }
        }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            other => other
                .into_entity::<CustomerError>()
                .unwrap_or_else(|e| CustomerError::ActorCommunicationError(e.to_string())),
        }
    }
}
