//! Navigation chrome: sidebar, header and layout.
//!
//! # Design
//! - Menu groups start collapsed on every mount and toggle independently.
//! - Active entries compare the whole path; a child route never lights up its group.
//! - The drawer flag is unrelated to menu state; it starts from the viewport width.

use crate::app::Route;
use crate::app::preferences::viewport_width;
use crate::components::atoms::icons::{
    IconChevronDown, IconChevronRight, IconHome, IconLogOut, IconMenu, IconSettings,
};
use crate::core::breakpoints::drawer_open_by_default;
use crate::core::nav::{DASHBOARD_ITEM, MenuGroup, MenuItem, MenuState, SETTINGS_ITEM, is_active};
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::{Link, Routable, use_location};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct LayoutProps {
    pub on_logout: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub(crate) fn layout(props: &LayoutProps) -> Html {
    let drawer_open = use_state(|| drawer_open_by_default(viewport_width()));
    let toggle_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |()| drawer_open.set(!*drawer_open))
    };

    html! {
        <div class="flex min-h-screen bg-base-200">
            <aside class={classes!(
                "bg-base-100", "w-64", "shrink-0", "border-r", "border-base-300",
                "transition-all", (!*drawer_open).then_some("hidden")
            )}>
                <Sidebar />
            </aside>
            <div class="flex min-w-0 flex-1 flex-col">
                <Header on_toggle_drawer={toggle_drawer} on_logout={props.on_logout.clone()} />
                <main class="flex-1 p-6">
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

#[function_component(Sidebar)]
pub(crate) fn sidebar() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let menu = use_state(MenuState::default);
    let location = use_location();
    let current = location
        .as_ref()
        .map(|loc| loc.path().to_string())
        .unwrap_or_default();

    let toggle = |group: MenuGroup| {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle(group);
            menu.set(next);
        })
    };

    html! {
        <nav class="flex h-full flex-col">
            <div class="border-b border-base-300 px-5 py-4">
                <strong class="text-primary text-lg">{bundle.text("app.brand", "Salesdesk")}</strong>
            </div>
            <ul class="menu w-full flex-1 gap-1 p-3">
                <li>{menu_link(&DASHBOARD_ITEM, &current, &bundle, html! { <IconHome size="4" /> })}</li>
                {for MenuGroup::ALL.into_iter().map(|group| {
                    let (key, default) = group.label();
                    let expanded = menu.is_expanded(group);
                    html! {
                        <li>
                            <button
                                type="button"
                                class="flex w-full items-center justify-between"
                                aria-expanded={expanded.to_string()}
                                onclick={toggle(group)}
                            >
                                <span>{bundle.text(key, default)}</span>
                                {if expanded {
                                    html! { <IconChevronDown size="4" /> }
                                } else {
                                    html! { <IconChevronRight size="4" /> }
                                }}
                            </button>
                            {if expanded {
                                html! {
                                    <ul>
                                        {for group.items().iter().map(|item| html! {
                                            <li>{menu_link(item, &current, &bundle, Html::default())}</li>
                                        })}
                                    </ul>
                                }
                            } else {
                                html! {}
                            }}
                        </li>
                    }
                })}
                <li>{menu_link(&SETTINGS_ITEM, &current, &bundle, html! { <IconSettings size="4" /> })}</li>
            </ul>
        </nav>
    }
}

fn menu_link(item: &MenuItem, current: &str, bundle: &TranslationBundle, icon: Html) -> Html {
    let Some(route) = Route::recognize(item.path) else {
        return Html::default();
    };
    let classes = classes!(is_active(current, item.path).then_some("menu-active"));
    html! {
        <Link<Route> to={route} classes={classes}>
            {icon}
            <span>{bundle.text(item.key, item.label)}</span>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct HeaderProps {
    pub on_toggle_drawer: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub(crate) fn header(props: &HeaderProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let session = use_selector(|store: &AppStore| store.session.clone());
    let email = session
        .user
        .as_ref()
        .map(|user| user.email.clone())
        .unwrap_or_default();

    let on_toggle = {
        let cb = props.on_toggle_drawer.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <header class="navbar bg-base-100 border-b border-base-300 px-4">
            <div class="flex-none">
                <button
                    class="btn btn-ghost btn-square"
                    type="button"
                    aria-label={bundle.text("shell.toggle_menu", "Mở/đóng menu")}
                    onclick={on_toggle}
                >
                    <IconMenu size="5" />
                </button>
            </div>
            <div class="flex-1" />
            <div class="flex flex-none items-center gap-3">
                <div class="avatar avatar-placeholder">
                    <div class="bg-primary text-primary-content w-9 rounded-full">
                        <span>{session.initial()}</span>
                    </div>
                </div>
                <div class="hidden flex-col leading-tight sm:flex">
                    <span class="font-medium">{session.display_name()}</span>
                    <span class="text-base-content/60 text-xs">{email}</span>
                </div>
                <button class="btn btn-ghost btn-sm" type="button" onclick={on_logout}>
                    <IconLogOut size="4" />
                    <span>{bundle.text("shell.logout", "Đăng xuất")}</span>
                </button>
            </div>
        </header>
    }
}
