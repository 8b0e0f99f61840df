//! Toast host bound to the app store.
//!
//! # Design
//! - Every toast schedules its own dismissal when it mounts.
//! - Dismissing an unknown id is a no-op, so timers may outlive their toast.

use crate::core::store::{AppStore, app_dispatch};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::{TOAST_TIMEOUT_MS, Toast};
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(ToastHost)]
pub(crate) fn toast_host() -> Html {
    let toasts = use_selector(|store: &AppStore| store.toasts.items().to_vec());
    let dismiss = Callback::from(|id: u64| {
        app_dispatch().reduce_mut(|store| store.toasts.dismiss(id));
    });

    html! {
        <div class="toast toast-end toast-bottom z-50" aria-live="polite" aria-atomic="true">
            {for toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={dismiss.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let id = props.toast.id;
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let handle = Timeout::new(TOAST_TIMEOUT_MS, move || on_dismiss.emit(id));
            move || drop(handle)
        });
    }
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("alert", format!("alert-{}", props.toast.kind.class()))} role="status">
            <span>{props.toast.message.clone()}</span>
            <button
                class="btn btn-ghost btn-xs"
                aria-label={bundle.text("toast.dismiss", "Đóng")}
                onclick={on_close}
            >
                {"✕"}
            </button>
        </div>
    }
}
