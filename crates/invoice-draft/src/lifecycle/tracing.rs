//! # Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run -p invoice-draft     # lifecycle and outcomes
//! RUST_LOG=debug cargo run -p invoice-draft    # plus every request payload
//! ```
//!
//! Module paths are hidden; actor logs carry an `entity_type` field instead:
//!
//! ```text
//! INFO Created entity_type="Product" id=product_1 size=1
//! INFO draft_flow:add_item: Action ok entity_type="InvoiceDraft" id=draft_1
//! WARN draft_flow:add_item: Action failed entity_type="InvoiceDraft" id=draft_1 error=Cannot add product-1: requested 12, only 10 available
//! ```

pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor
        .compact()
        .try_init();
}
