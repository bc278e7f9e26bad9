//! Column binding: the user names which raw column supplies each
//! canonical field; mapping validates the bindings, cleans rows up and
//! produces the tables keyword queries run against.

#![deny(unsafe_code)]

pub mod bindings;
pub mod error;
pub mod mapper;

pub use bindings::{BindingsFile, ItemBindings, PlantBindings};
pub use error::BindingError;
pub use mapper::{map_items, map_plants};
