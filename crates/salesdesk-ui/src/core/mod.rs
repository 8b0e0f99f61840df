//! Core, DOM-free primitives and helpers for the console.
pub mod api_error;
pub mod auth;
pub mod breakpoints;
pub mod edit;
pub mod endpoints;
pub mod form;
pub mod format;
pub mod nav;
pub mod request;
pub mod store;
pub mod theme;
