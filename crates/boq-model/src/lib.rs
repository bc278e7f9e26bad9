//! Canonical data model for the bill-of-quantities picker.
//!
//! Everything downstream of the workbook decoder speaks these types:
//! loosely typed [`Cell`]s inside a [`RawTable`], canonical
//! [`WorkItem`]/[`PlantItem`] rows after column binding, and the
//! deterministic [`SelectionKey`] identities the selection store is
//! keyed by.

#![deny(unsafe_code)]

pub mod cell;
pub mod item;
pub mod key;
pub mod sortkey;
pub mod table;

pub use cell::Cell;
pub use item::{
    COL_DESCRIPTION, COL_ID, COL_UNIT, DROPPED_EXPORT_COLUMNS, PLANT_UNIT, PlantItem, PlantTable,
    ReadyTable, SelectedRow, WorkItem, strip_chapter_prefix,
};
pub use key::{Namespace, SelectionKey};
pub use sortkey::{cmp_numeric_keys, export_key, numeric_key, pure_numeric_id};
pub use table::RawTable;
