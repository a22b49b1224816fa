//! Core data types shared across the store and lifecycle layers.

pub(crate) mod filter;
pub(crate) mod session;

pub(crate) use filter::{SessionFilters, TimeRange};
pub(crate) use session::Session;
