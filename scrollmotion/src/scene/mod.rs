//! JSON scene files.

/// Loaded scenes.
pub mod document;
pub(crate) mod model;
