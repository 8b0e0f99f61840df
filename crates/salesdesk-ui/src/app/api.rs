//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Swap the bearer token through interior mutability instead of rebuilding clients.

use crate::services::api::ApiClient;
use std::rc::Rc;
use yew::Callback;

/// Shared API client context for pages.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Build the context; `on_unauthorized` runs whenever the server answers 401.
    pub(crate) fn new(base_url: impl Into<String>, on_unauthorized: Callback<()>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url, on_unauthorized)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
