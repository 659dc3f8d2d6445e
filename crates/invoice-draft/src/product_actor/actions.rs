//! Custom actions for the Product actor.

/// Stock operations on a single product.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes units out of stock. Fails if the requested amount exceeds what is left.
    ReserveStock(u32),
    /// Returns previously reserved units to stock.
    ReleaseStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    /// Stock left after the reservation.
    ReserveStock(u32),
    /// Stock after the release.
    ReleaseStock(u32),
}
