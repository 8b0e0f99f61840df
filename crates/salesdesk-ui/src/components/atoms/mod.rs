//! Shared UI atoms used across the shell and pages.

pub(crate) mod confirm_dialog;
pub(crate) mod empty_state;
pub(crate) mod icon_button;
pub(crate) mod icons;
pub(crate) mod loading;
pub(crate) mod page_header;
pub(crate) mod record_state;
pub(crate) mod search_input;

pub(crate) use confirm_dialog::ConfirmDialog;
pub(crate) use empty_state::EmptyState;
pub(crate) use icon_button::IconButton;
pub(crate) use loading::{FullPageLoader, ProgressLine};
pub(crate) use page_header::PageHeader;
pub(crate) use record_state::RecordUnavailable;
pub(crate) use search_input::SearchInput;
