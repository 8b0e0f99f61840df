//! Persistence and environment helpers for the app shell.

use crate::core::endpoints::api_root;
use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use chrono::NaiveDate;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use js_sys::Date;
use serde::Serialize;

pub(crate) const TOKEN_KEY: &str = "salesdesk.token";
pub(crate) const THEME_KEY: &str = "salesdesk.theme";
pub(crate) const LOCALE_KEY: &str = "salesdesk.locale";

const DEFAULT_ORIGIN: &str = "http://localhost:8000";

pub(crate) fn load_token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_KEY)
        .ok()
        .filter(|token| !token.trim().is_empty())
}

pub(crate) fn persist_token(token: &str) {
    set_storage(TOKEN_KEY, token);
}

pub(crate) fn clear_token() {
    delete_storage(TOKEN_KEY);
}

pub(crate) fn load_theme() -> ThemeMode {
    LocalStorage::get::<String>(THEME_KEY)
        .map(|value| ThemeMode::parse(&value))
        .unwrap_or_default()
}

pub(crate) fn persist_theme(theme: ThemeMode) {
    set_storage(THEME_KEY, theme.as_str());
}

pub(crate) fn load_locale() -> LocaleCode {
    if let Some(locale) = LocalStorage::get::<String>(LOCALE_KEY)
        .ok()
        .and_then(|value| LocaleCode::from_lang_tag(&value))
    {
        return locale;
    }
    window()
        .navigator()
        .language()
        .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        .unwrap_or(DEFAULT_LOCALE)
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

/// Mirror the theme onto `<body data-theme>` for daisyUI.
pub(crate) fn apply_theme(theme: ThemeMode) {
    if let Some(body) = window().document().and_then(|document| document.body()) {
        if let Err(err) = body.set_attribute("data-theme", theme.as_str()) {
            console::warn!("theme attribute rejected", err);
        }
    }
}

/// Mirror the locale onto `<html lang>`.
pub(crate) fn apply_locale(locale: LocaleCode) {
    if let Some(root) = window()
        .document()
        .and_then(|document| document.document_element())
    {
        if let Err(err) = root.set_attribute("lang", locale.code()) {
            console::warn!("lang attribute rejected", err);
        }
    }
}

/// Versioned API root from the compile-time `SALESDESK_API_URL`.
pub(crate) fn api_base_url() -> String {
    api_root(option_env!("SALESDESK_API_URL").unwrap_or(DEFAULT_ORIGIN))
}

/// Whether dashboard widgets read the aggregate endpoints instead of placeholders.
pub(crate) fn dashboard_live() -> bool {
    option_env!("SALESDESK_DASHBOARD").is_some_and(|value| value.eq_ignore_ascii_case("live"))
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn now_secs() -> i64 {
    (Date::now() / 1000.0) as i64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn now_millis() -> u64 {
    Date::now() as u64
}

/// Today's date in the browser's timezone.
pub(crate) fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        i32::try_from(now.get_full_year()).unwrap_or(1970),
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Browser wall-clock time as `HH:MM:SS`.
pub(crate) fn clock_label() -> String {
    let now = Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds()
    )
}

pub(crate) fn viewport_width() -> u16 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map_or(1280, |width| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let clamped = width.clamp(0.0, f64::from(u16::MAX)) as u16;
            clamped
        })
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail.to_string());
}
