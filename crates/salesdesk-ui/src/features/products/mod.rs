//! Product and service catalogue pages.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

#[cfg(target_arch = "wasm32")]
pub(crate) use view::{ProductCreatePage, ProductDetailPage, ProductEditPage, ProductListPage};
