use crate::app::Route;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::Link;

/// Catch-all page for unknown paths.
#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <div class="flex min-h-screen flex-col items-center justify-center gap-4 text-center">
            <h1 class="text-primary text-7xl font-bold">{"404"}</h1>
            <p class="text-xl">{bundle.text("not_found.title", "Không tìm thấy trang")}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {bundle.text("not_found.home", "Về trang chủ")}
            </Link<Route>>
        </div>
    }
}
