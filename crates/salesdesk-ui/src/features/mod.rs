//! Feature slices, one per console section.
//!
//! # Design
//! - Each slice keeps DOM-free state in `state.rs` and gates its views to wasm.
//! - Cross-slice helpers live beside the slices rather than in `core`.

pub mod accounts;
pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod discounts;
pub mod invoices;
pub mod lines;
pub mod price_lists;
pub mod products;
pub mod settings;
pub mod vouchers;

#[cfg(target_arch = "wasm32")]
pub(crate) mod common;
#[cfg(target_arch = "wasm32")]
pub(crate) mod line_editor;
