//! CLI library components for the BoQ picker.

pub mod logging;
