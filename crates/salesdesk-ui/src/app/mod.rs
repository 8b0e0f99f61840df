//! Application root: providers, session bootstrap and route gating.
//!
//! # Design
//! - One API client per boot; its 401 hook ends the session through the store.
//! - Nothing routes until the stored session has been restored, so a signed-in
//!   user never flashes through the login screen.
//! - Preferences are applied and persisted only after they were loaded.

use crate::app::api::ApiCtx;
use crate::components::atoms::FullPageLoader;
use crate::components::not_found::NotFoundPage;
use crate::components::shell::Layout;
use crate::components::toast::ToastHost;
use crate::core::auth::{GuardOutcome, guard};
use crate::core::store::{AppStore, Preferences, app_dispatch};
use crate::features::accounts::{AccountCreatePage, AccountListPage};
use crate::features::auth::LoginPage;
use crate::features::customers::{CustomerCreatePage, CustomerEditPage, CustomerListPage};
use crate::features::dashboard::DashboardPage;
use crate::features::discounts::{DiscountCreatePage, DiscountEditPage, DiscountListPage};
use crate::features::invoices::{InvoiceCreatePage, InvoiceDetailPage, InvoiceListPage};
use crate::features::price_lists::{PriceListCreatePage, PriceListEditPage, PriceListPage};
use crate::features::products::{
    ProductCreatePage, ProductDetailPage, ProductEditPage, ProductListPage,
};
use crate::features::settings::SettingsPage;
use crate::features::vouchers::{VoucherCreatePage, VoucherDetailPage, VoucherListPage};
use crate::i18n::TranslationBundle;
use preferences::{
    api_base_url, apply_locale, apply_theme, load_locale, load_theme, persist_locale,
    persist_theme,
};
pub(crate) use routes::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;
pub(crate) mod session;

#[function_component(SalesdeskApp)]
pub(crate) fn salesdesk_app() -> Html {
    let booted = use_state(|| false);
    let api_ctx = use_memo((), |()| {
        ApiCtx::new(api_base_url(), Callback::from(|()| session::expire()))
    });
    let token = use_selector(|store: &AppStore| store.session.token.clone());
    let prefs = use_selector(|store: &AppStore| store.prefs);
    let bundle = use_memo(prefs.locale, |locale| TranslationBundle::new(*locale));

    {
        let booted = booted.clone();
        let client = api_ctx.client.clone();
        use_effect_with((), move |()| {
            let restored = session::restore();
            let pending = restored.token.clone();
            app_dispatch().reduce_mut(|store| {
                store.session = restored;
                store.prefs = Preferences {
                    theme: load_theme(),
                    locale: load_locale(),
                };
            });
            if let Some(token) = pending {
                client.set_token(Some(token));
                spawn_local(session::refresh(client));
            }
            booted.set(true);
        });
    }
    {
        let client = api_ctx.client.clone();
        use_effect_with(((*token).clone(), *booted), move |(token, booted)| {
            if *booted {
                client.set_token(token.clone());
            }
        });
    }
    use_effect_with((*prefs, *booted), |(prefs, booted)| {
        if *booted {
            apply_theme(prefs.theme);
            persist_theme(prefs.theme);
            apply_locale(prefs.locale);
            persist_locale(prefs.locale);
        }
    });

    let body = if *booted {
        html! { <Switch<Route> render={switch} /> }
    } else {
        html! { <FullPageLoader /> }
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    {body}
                    <ToastHost />
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    html! { <RouteGate {route} /> }
}

#[derive(Properties, PartialEq)]
struct RouteGateProps {
    route: Route,
}

#[function_component(RouteGate)]
fn route_gate(props: &RouteGateProps) -> Html {
    let session = use_selector(|store: &AppStore| store.session.clone());
    match guard(&session, props.route.is_public()) {
        GuardOutcome::Wait => html! { <FullPageLoader /> },
        GuardOutcome::RedirectToLogin => html! { <Redirect<Route> to={Route::Login} /> },
        GuardOutcome::Render => match &props.route {
            Route::Login if session.is_authenticated() => {
                html! { <Redirect<Route> to={Route::Dashboard} /> }
            }
            Route::Login => html! { <LoginPage /> },
            Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
            Route::NotFound => html! { <NotFoundPage /> },
            route => html! {
                <Layout on_logout={Callback::from(|()| session::logout())}>
                    {page(route)}
                </Layout>
            },
        },
    }
}

fn page(route: &Route) -> Html {
    match route.clone() {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Customers => html! { <CustomerListPage /> },
        Route::CustomerCreate => html! { <CustomerCreatePage /> },
        Route::CustomerEdit { id } => html! { <CustomerEditPage code={id} /> },
        Route::Products => html! { <ProductListPage /> },
        Route::ProductCreate => html! { <ProductCreatePage /> },
        Route::ProductEdit { id } => html! { <ProductEditPage code={id} /> },
        Route::ProductDetail { id } => html! { <ProductDetailPage code={id} /> },
        Route::PriceLists => html! { <PriceListPage /> },
        Route::PriceListCreate => html! { <PriceListCreatePage /> },
        Route::PriceListEdit { id } => html! { <PriceListEditPage {id} /> },
        Route::Discounts => html! { <DiscountListPage /> },
        Route::DiscountCreate => html! { <DiscountCreatePage /> },
        Route::DiscountEdit { maspdv, date } => html! { <DiscountEditPage {maspdv} {date} /> },
        Route::Invoices => html! { <InvoiceListPage /> },
        Route::InvoiceCreate => html! { <InvoiceCreatePage /> },
        Route::InvoiceDetail { id } => html! { <InvoiceDetailPage soct={id} /> },
        Route::Vouchers => html! { <VoucherListPage /> },
        Route::VoucherCreate => html! { <VoucherCreatePage /> },
        Route::VoucherDetail { id } => html! { <VoucherDetailPage sophieu={id} /> },
        Route::Accounts => html! { <AccountListPage /> },
        Route::AccountCreate => html! { <AccountCreatePage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::Home | Route::Login | Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<SalesdeskApp>::with_root(root).render();
    } else {
        yew::Renderer::<SalesdeskApp>::new().render();
    }
}
