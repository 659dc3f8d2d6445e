//! Domain types shared by the actors, clients and presentation layer.

pub mod catalog;
pub mod customer;
pub mod draft;
pub mod invoice;
pub mod money;

pub use catalog::*;
pub use customer::*;
pub use draft::*;
pub use invoice::*;
pub use money::*;
