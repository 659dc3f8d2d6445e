//! # Invoice Draft
//!
//! The invoice-creation flow of a small-shop invoicing and inventory system, built on
//! [`resource_actor`].
//!
//! An invoice is assembled as a draft: products and services are picked from the
//! catalog, repeated picks merge into one line, product quantities are capped by stock,
//! and subtotal, tax (10% of subtotal minus discount) and total are recomputed on every
//! change. Submitting turns the draft into a save request for the invoice store, which
//! checks the customer and reserves stock.
//!
//! ## Modules
//!
//! - [`model`]: ids, catalog entries, customers, invoices, drafts and money helpers
//! - [`product_actor`], [`service_actor`], [`customer_actor`], [`invoice_actor`],
//!   [`draft_actor`]: one resource actor each
//! - [`clients`]: typed clients, including the [`CatalogClient`](clients::CatalogClient)
//!   lookup a draft uses
//! - [`presentation`]: row bookkeeping and a text rendering of a draft
//! - [`lifecycle`]: [`InvoicingSystem`](lifecycle::InvoicingSystem) and tracing setup
//! - [`config`]: [`AppConfig`](config::AppConfig)
//!
//! ## Testing
//!
//! The pure draft rules are unit tested in [`draft_actor::builder`]. Clients are tested
//! against [`resource_actor::mock`]; `tests/` drives the full system.

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod draft_actor;
pub mod invoice_actor;
pub mod lifecycle;
pub mod model;
pub mod presentation;
pub mod product_actor;
pub mod service_actor;
