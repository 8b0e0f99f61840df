//! Network services for the console.

pub(crate) mod api;
