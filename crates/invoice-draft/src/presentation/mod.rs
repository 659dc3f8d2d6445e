//! Keeps a rendered line-item table in step with a draft.
//!
//! The draft never knows about rows. A [`RowRegistry`] maps each line's [`ItemKey`]
//! to whatever handle the front end uses for a row and turns each [`DraftView`] into
//! row operations. [`render_table`] is a plain-text rendering used by the demo binary.
//!
//! [`ItemKey`]: crate::model::ItemKey
//! [`DraftView`]: crate::model::DraftView

pub mod rows;
pub mod table;

pub use rows::{RowOp, RowRegistry};
pub use table::render_table;
