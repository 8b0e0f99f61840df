//! Settings page view.
//!
//! # Design
//! - Preferences live in the store; the app shell applies and persists them.
//! - Changes take effect immediately, there is no save step.

use crate::core::store::{AppStore, Preferences};
use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let (store, dispatch) = use_store::<AppStore>();
    let Preferences { theme, locale } = store.prefs;

    let on_theme = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let next = if input.checked() {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                };
                dispatch.reduce_mut(|store| store.prefs.theme = next);
            }
        })
    };
    let on_locale = Callback::from(move |event: Event| {
        if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
            if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                dispatch.reduce_mut(|store| store.prefs.locale = next);
            }
        }
    });

    html! {
        <div class="mx-auto flex max-w-2xl flex-col gap-6">
            <h1 class="text-2xl font-semibold">{bundle.text("settings.title", "Cài đặt")}</h1>
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-6">
                    <label class="flex items-center justify-between gap-4">
                        <div>
                            <p class="font-medium">{bundle.text("settings.dark_mode", "Giao diện tối")}</p>
                            <p class="text-base-content/60 text-sm">
                                {bundle.text("settings.dark_mode_hint", "Dùng nền tối cho toàn bộ ứng dụng")}
                            </p>
                        </div>
                        <input type="checkbox" class="toggle toggle-primary"
                            checked={theme == ThemeMode::Dark} onchange={on_theme} />
                    </label>
                    <label class="flex items-center justify-between gap-4">
                        <p class="font-medium">{bundle.text("settings.language", "Ngôn ngữ")}</p>
                        <select class="select select-bordered w-48" onchange={on_locale}>
                            {for LocaleCode::all().into_iter().map(|option| html! {
                                <option value={option.code()} selected={option == locale}>{option.label()}</option>
                            })}
                        </select>
                    </label>
                </div>
            </div>
        </div>
    }
}
