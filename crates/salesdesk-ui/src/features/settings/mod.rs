//! Settings feature slice.
//!
//! # Design
//! - Keep settings rendering in the view module.
//! - Persistence follows the store from the app shell.

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

#[cfg(target_arch = "wasm32")]
pub(crate) use view::SettingsPage;
