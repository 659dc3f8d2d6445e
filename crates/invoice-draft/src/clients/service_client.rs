use crate::model::{Service, ServiceCreate, ServiceDetails, ServiceId, ServiceUpdate};
use crate::service_actor::ServiceError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Service actor.
#[derive(Clone)]
pub struct ServiceClient {
    inner: ResourceClient<Service>,
}

impl ServiceClient {
    pub fn new(inner: ResourceClient<Service>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_service(&self, params: ServiceCreate) -> Result<ServiceId, ServiceError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_service(
        &self,
        id: ServiceId,
        update: ServiceUpdate,
    ) -> Result<Service, ServiceError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn details(&self, id: ServiceId) -> Result<Option<ServiceDetails>, ServiceError> {
        Ok(self.get(id).await?.as_ref().map(ServiceDetails::from))
    }
}

#[async_trait]
impl ActorClient<Service> for ServiceClient {
    type Error = ServiceError;

    fn inner(&self) -> &ResourceClient<Service> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ServiceError::NotFound(id),
            other => other
                .into_entity::<ServiceError>()
                .unwrap_or_else(|e| ServiceError::ActorCommunicationError(e.to_string())),
        }
    }
}
