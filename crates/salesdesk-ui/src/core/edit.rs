//! Lifecycle of edit and detail pages that load one record by key.
//!
//! # Design
//! - Loading renders a full-page spinner; nothing else is interactive.
//! - Not-found is terminal: no retry, only navigation back to the list.
//! - Only the loading phase may trigger a fetch.

use crate::core::api_error::ApiError;

/// Phase of a keyed page.
#[derive(Clone, Debug, PartialEq)]
pub enum EditPhase<T> {
    /// Waiting for the record.
    Loading,
    /// Record loaded.
    Ready(T),
    /// The key does not exist.
    NotFound,
    /// The fetch failed for another reason.
    Failed(String),
}

impl<T> EditPhase<T> {
    /// Map a fetch result onto the page phase.
    #[must_use]
    pub fn from_fetch(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(record) => Self::Ready(record),
            Err(ApiError::NotFound) => Self::NotFound,
            Err(err) => Self::Failed(err.user_message(fallback)),
        }
    }

    /// Whether a fetch should be issued for the current phase.
    #[must_use]
    pub const fn needs_fetch(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Apply the page key before fetching. A changed key restarts loading,
    /// an unchanged one keeps a settled phase. Returns whether to fetch.
    pub fn rekey(&mut self, key_changed: bool) -> bool {
        if key_changed {
            *self = Self::Loading;
        }
        self.needs_fetch()
    }

    /// Loaded record, if any.
    #[must_use]
    pub const fn record(&self) -> Option<&T> {
        match self {
            Self::Ready(record) => Some(record),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_terminal() {
        let phase: EditPhase<u8> = EditPhase::from_fetch(Err(ApiError::NotFound), "x");
        assert_eq!(phase, EditPhase::NotFound);
        assert!(!phase.needs_fetch());
        assert!(phase.record().is_none());
    }

    #[test]
    fn same_key_never_refetches_a_missing_record() {
        let mut phase: EditPhase<u8> = EditPhase::from_fetch(Err(ApiError::NotFound), "x");
        assert!(!phase.rekey(false));
        assert_eq!(phase, EditPhase::NotFound);

        assert!(phase.rekey(true));
        assert_eq!(phase, EditPhase::Loading);
    }

    #[test]
    fn first_key_fetches() {
        let mut phase = EditPhase::<u8>::Loading;
        assert!(phase.rekey(true));
        let mut ready = EditPhase::Ready(3_u8);
        assert!(!ready.rekey(false));
        assert_eq!(ready.record(), Some(&3));
    }

    #[test]
    fn other_failures_carry_message() {
        let phase: EditPhase<u8> = EditPhase::from_fetch(
            Err(ApiError::transport("offline")),
            "Không thể tải thông tin sản phẩm",
        );
        assert_eq!(
            phase,
            EditPhase::Failed("Không thể tải thông tin sản phẩm".to_string())
        );
    }

    #[test]
    fn only_loading_fetches() {
        assert!(EditPhase::<u8>::Loading.needs_fetch());
        let ready = EditPhase::from_fetch(Ok(7_u8), "x");
        assert!(!ready.needs_fetch());
        assert_eq!(ready.record(), Some(&7));
    }
}
