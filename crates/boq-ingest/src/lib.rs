//! Workbook decoding: turns an uploaded `.xls`/`.xlsx` file into a
//! [`boq_model::RawTable`] given a sheet name and a skip-rows count.

#![deny(unsafe_code)]

pub mod error;
pub mod workbook;

pub use error::IngestError;
pub use workbook::Workbook;
