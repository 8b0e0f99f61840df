use super::state::{LoginForm, validate};
use crate::app::api::ApiCtx;
use crate::app::session;
use crate::components::form::{InputKind, TextField, error_for, on_submit};
use crate::core::form::{FormAction, FormState};
use crate::core::store::AppStore;
use crate::features::common::{begin_submit, bind};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let session_error = use_selector(|store: &AppStore| store.session.error.clone());
    let form = use_reducer(|| FormState::new(LoginForm::default()));

    let submit = {
        let form = form.clone();
        Callback::from(move |()| {
            let (Some(values), Some(api)) = (begin_submit(&form, validate), api.clone()) else {
                return;
            };
            let form = form.clone();
            spawn_local(async move {
                session::login(api.client, values.to_request()).await;
                form.dispatch(FormAction::Finish);
            });
        })
    };

    let values = &form.values;
    let errors = &form.errors;
    let busy = form.submitting;

    html! {
        <div class="bg-base-200 flex min-h-screen items-center justify-center p-4">
            <form class="card bg-base-100 w-full max-w-sm shadow-xl" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card-body gap-4">
                    <div class="text-center">
                        <p class="text-primary text-xl font-bold">{bundle.text("app.brand", "Salesdesk")}</p>
                        <h1 class="text-lg font-semibold">{bundle.text("login.title", "Đăng nhập")}</h1>
                    </div>
                    {(*session_error).clone().map(|message| html! {
                        <div class="alert alert-error text-sm" role="alert">{message}</div>
                    }).unwrap_or_default()}
                    <TextField label={bundle.text("login.email", "Email")} kind={InputKind::Email}
                        value={values.email.clone()} placeholder="ketoan@congty.vn"
                        on_change={bind(&form, "email", |f, v| f.email = v)}
                        error={error_for(errors, "email")} disabled={busy} required=true />
                    <TextField label={bundle.text("login.password", "Mật khẩu")} kind={InputKind::Password}
                        value={values.password.clone()}
                        on_change={bind(&form, "password", |f, v| f.password = v)}
                        error={error_for(errors, "password")} disabled={busy} required=true />
                    <button class="btn btn-primary w-full" type="submit" disabled={busy}>
                        {if busy {
                            html! { <span class="loading loading-spinner loading-sm"></span> }
                        } else {
                            html! { {bundle.text("login.submit", "Đăng nhập")} }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
