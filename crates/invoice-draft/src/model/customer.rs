use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 20;

/// A customer an invoice can be issued to.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub preferences: Option<String>,
}

/// Body of a customer-create request, as the invoice form posts it.
///
/// Optional fields arrive as empty strings when the user left them blank;
/// [`CustomerCreate::normalized`] turns those into `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub preferences: Option<String>,
}

impl CustomerCreate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Trims every field and maps blank optional fields to `None`.
    pub fn normalized(self) -> Self {
        fn blank_to_none(field: Option<String>) -> Option<String> {
            field
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        }

        Self {
            name: self.name.trim().to_string(),
            email: blank_to_none(self.email),
            phone: blank_to_none(self.phone),
            address: blank_to_none(self.address),
            preferences: blank_to_none(self.preferences),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub preferences: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub name: String,
}

/// Wire response of a customer-create request.
///
/// ```json
/// {"status": "success", "message": "Customer created", "customer": {"id": 1, "name": "Asha"}}
/// {"status": "error", "message": "Customer name is required"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CustomerCreateResponse {
    Success {
        message: String,
        customer: CustomerSummary,
    },
    Error {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_fields_become_none() {
        let params = CustomerCreate {
            name: "  Asha Rao ".into(),
            email: Some("".into()),
            phone: Some(" 98450 12345 ".into()),
            address: Some("   ".into()),
            preferences: None,
        }
        .normalized();

        assert_eq!(params.name, "Asha Rao");
        assert_eq!(params.email, None);
        assert_eq!(params.phone.as_deref(), Some("98450 12345"));
        assert_eq!(params.address, None);
    }

    #[test]
    fn response_is_tagged_by_status() {
        let ok = CustomerCreateResponse::Success {
            message: "Customer created".into(),
            customer: CustomerSummary {
                id: CustomerId(3),
                name: "Asha".into(),
            },
        };
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({
                "status": "success",
                "message": "Customer created",
                "customer": {"id": 3, "name": "Asha"}
            })
        );

        let err: CustomerCreateResponse = serde_json::from_value(serde_json::json!({
            "status": "error",
            "message": "Customer name is required"
        }))
        .unwrap();
        assert!(matches!(err, CustomerCreateResponse::Error { .. }));
    }
}
