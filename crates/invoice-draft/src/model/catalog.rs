//! Catalog resources: products (with stock) and services (without).
//!
//! Both implement [`ActorEntity`](resource_actor::ActorEntity); see the
//! [`product_actor`](crate::product_actor) and [`service_actor`](crate::service_actor)
//! modules. Ids are scoped per kind, so product 1 and service 1 are different items and
//! are told apart by [`ItemKey`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Type-safe identifier for Services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub u32);

impl From<u32> for ServiceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "service_{}", self.0)
    }
}

/// Whether a line refers to a product or a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Product,
    Service,
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Product => f.write_str("Product"),
            ItemKind::Service => f.write_str("Service"),
        }
    }
}

/// Identity of a catalog item, and of its line and table row in a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub kind: ItemKind,
    pub id: u32,
}

impl ItemKey {
    pub fn product(id: ProductId) -> Self {
        Self {
            kind: ItemKind::Product,
            id: id.0,
        }
    }

    pub fn service(id: ServiceId) -> Self {
        Self {
            kind: ItemKind::Service,
            id: id.0,
        }
    }
}

impl Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ItemKind::Product => write!(f, "product-{}", self.id),
            ItemKind::Service => write!(f, "service-{}", self.id),
        }
    }
}

/// A product in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    /// Units in stock.
    pub quantity: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}

/// Wire shape of a product lookup: `{id, name, price, available_quantity}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub available_quantity: u32,
}

impl From<&Product> for ProductDetails {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            available_quantity: product.quantity,
        }
    }
}

/// A bookable service (repair, cleaning, engraving...). Services carry no stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub price: Decimal,
    pub service_type: String,
    /// Estimated duration in days.
    pub duration: Option<u32>,
    pub requires_deposit: bool,
}

#[derive(Debug, Clone)]
pub struct ServiceCreate {
    pub name: String,
    pub price: Decimal,
    pub service_type: String,
    pub duration: Option<u32>,
    pub requires_deposit: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceUpdate {
    pub price: Option<Decimal>,
    pub duration: Option<u32>,
    pub requires_deposit: Option<bool>,
}

/// Wire shape of a service lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetails {
    pub id: ServiceId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub service_type: String,
    pub duration: Option<u32>,
    pub requires_deposit: bool,
}

impl From<&Service> for ServiceDetails {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id,
            name: service.name.clone(),
            price: service.price,
            service_type: service.service_type.clone(),
            duration: service.duration,
            requires_deposit: service.requires_deposit,
        }
    }
}

/// What a draft needs to know about an item at selection time.
///
/// `available_quantity` is `Some` for products (the stock ceiling) and `None` for
/// services, which are never stock-limited.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub key: ItemKey,
    pub name: String,
    pub unit_price: Decimal,
    pub available_quantity: Option<u32>,
}

impl From<ProductDetails> for CatalogEntry {
    fn from(details: ProductDetails) -> Self {
        Self {
            key: ItemKey::product(details.id),
            name: details.name,
            unit_price: details.price,
            available_quantity: Some(details.available_quantity),
        }
    }
}

impl From<ServiceDetails> for CatalogEntry {
    fn from(details: ServiceDetails) -> Self {
        Self {
            key: ItemKey::service(details.id),
            name: details.name,
            unit_price: details.price,
            available_quantity: None,
        }
    }
}
