//! The query/selection core: keyword splitting, the filter/merge
//! pipeline over the ready tables, the idempotent selection store and
//! the session context that owns all of it.

#![deny(unsafe_code)]

pub mod filter;
pub mod session;
pub mod store;
pub mod terms;

pub use filter::{
    EmptyQueryPolicy, FilterOutcome, ItemMatch, PLANT_PREVIEW_ROWS, SortOrder, filter_items,
    filter_plants, sample_labels,
};
pub use session::Session;
pub use store::SelectionStore;
pub use terms::split_terms;
