//! App-wide yewdux store slices.
//!
//! # Design
//! - One store is the source of truth for the session, so header, sidebar and
//!   route guard read it without prop drilling.
//! - Page data and form state stay local to each page and never enter the store.

use crate::core::auth::Session;
use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use crate::models::{ToastKind, ToastQueue};
#[cfg(target_arch = "wasm32")]
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Authentication state.
    pub session: Session,
    /// On-screen notifications.
    pub toasts: ToastQueue,
    /// Persisted display preferences.
    pub prefs: Preferences,
}

/// Display preferences mirrored to local storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    /// Colour scheme.
    pub theme: ThemeMode,
    /// UI language.
    pub locale: LocaleCode,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            locale: DEFAULT_LOCALE,
        }
    }
}

impl AppStore {
    /// Queue a toast.
    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toasts.push(kind, message);
    }
}

/// Dispatch handle bound to the global store context.
#[cfg(target_arch = "wasm32")]
pub(crate) fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::global()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_is_signed_out_with_vietnamese_ui() {
        let store = AppStore::default();
        assert!(!store.session.is_authenticated());
        assert_eq!(store.prefs.locale, LocaleCode::Vi);
        assert!(store.toasts.items().is_empty());
    }

    #[test]
    fn notify_queues_toasts() {
        let mut store = AppStore::default();
        store.notify(ToastKind::Success, "Cập nhật sản phẩm thành công");
        assert_eq!(store.toasts.items().len(), 1);
    }
}
