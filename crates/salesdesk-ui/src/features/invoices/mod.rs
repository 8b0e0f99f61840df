//! Sales invoice pages.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

#[cfg(target_arch = "wasm32")]
pub(crate) use view::{InvoiceCreatePage, InvoiceDetailPage, InvoiceListPage};
