//! [`ActorEntity`] implementation for [`Customer`].

use super::error::CustomerError;
use crate::model::{
    Customer, CustomerCreate, CustomerId, CustomerUpdate, MAX_NAME_LEN, MAX_PHONE_LEN,
};
use async_trait::async_trait;
use resource_actor::ActorEntity;

fn check_phone(phone: Option<&str>) -> Result<(), CustomerError> {
    match phone {
        Some(phone) if phone.chars().count() > MAX_PHONE_LEN => Err(CustomerError::PhoneTooLong),
        _ => Ok(()),
    }
}

fn check_email(email: Option<&str>) -> Result<(), CustomerError> {
    match email {
        Some(email) if !email.contains('@') => Err(CustomerError::InvalidEmail(email.to_string())),
        _ => Ok(()),
    }
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    /// Validates and normalizes the form input.
    ///
    /// Blank optional fields are stored as `None`.
    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, CustomerError> {
        let params = params.normalized();
        if params.name.is_empty() {
            return Err(CustomerError::NameRequired);
        }
        if params.name.chars().count() > MAX_NAME_LEN {
            return Err(CustomerError::NameTooLong);
        }
        check_phone(params.phone.as_deref())?;
        check_email(params.email.as_deref())?;

        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            phone: params.phone,
            address: params.address,
            preferences: params.preferences,
        })
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), CustomerError> {
        check_phone(update.phone.as_deref())?;
        check_email(update.email.as_deref())?;
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        if let Some(preferences) = update.preferences {
            self.preferences = Some(preferences);
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CustomerError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        let err = Customer::from_create_params(CustomerId(1), CustomerCreate::named("   "))
            .unwrap_err();
        assert_eq!(err, CustomerError::NameRequired);
    }

    #[test]
    fn long_fields_are_rejected() {
        let err = Customer::from_create_params(CustomerId(1), CustomerCreate::named("x".repeat(101)))
            .unwrap_err();
        assert_eq!(err, CustomerError::NameTooLong);

        let params = CustomerCreate {
            phone: Some("0".repeat(21)),
            ..CustomerCreate::named("Asha")
        };
        let err = Customer::from_create_params(CustomerId(1), params).unwrap_err();
        assert_eq!(err, CustomerError::PhoneTooLong);
    }

    #[test]
    fn blank_email_is_not_validated() {
        let params = CustomerCreate {
            email: Some("  ".into()),
            ..CustomerCreate::named("Asha")
        };
        let customer = Customer::from_create_params(CustomerId(1), params).unwrap();
        assert_eq!(customer.email, None);
    }
}
