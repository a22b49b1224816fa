//! Rendering of sessions for the terminal.

pub(crate) mod json;
pub(crate) mod table;

pub(crate) use json::sessions_json;
pub(crate) use table::{format_duration, format_moment, print_session_table};
