use super::error::ServiceError;
use crate::model::{Service, ServiceCreate, ServiceId, ServiceUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Service {
    type Id = ServiceId;
    type Create = ServiceCreate;
    type Update = ServiceUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ServiceError;

    fn from_create_params(id: ServiceId, params: ServiceCreate) -> Result<Self, ServiceError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(ServiceError::InvalidService("name is required".into()));
        }
        if params.price.is_sign_negative() {
            return Err(ServiceError::InvalidService(format!(
                "price must not be negative, got {}",
                params.price
            )));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            price: params.price,
            service_type: params.service_type,
            duration: params.duration,
            requires_deposit: params.requires_deposit,
        })
    }

    async fn on_update(&mut self, update: ServiceUpdate, _ctx: &()) -> Result<(), ServiceError> {
        if let Some(price) = update.price {
            if price.is_sign_negative() {
                return Err(ServiceError::InvalidService(format!(
                    "price must not be negative, got {price}"
                )));
            }
            self.price = price;
        }
        if let Some(duration) = update.duration {
            self.duration = Some(duration);
        }
        if let Some(requires_deposit) = update.requires_deposit {
            self.requires_deposit = requires_deposit;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), ServiceError> {
        Ok(())
    }
}
