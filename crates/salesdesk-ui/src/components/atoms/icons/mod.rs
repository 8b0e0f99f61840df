//! Inline SVG icon set.
//!
//! # Design
//! - Every icon shares one 24px outline frame; only the path body differs.
//! - Icons without a title are hidden from assistive technology.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub size: Option<AttrValue>,
}

fn size_class(size: Option<&AttrValue>) -> Option<String> {
    size.map(|value| {
        let raw = value.as_ref();
        if raw.starts_with("size-") {
            raw.to_string()
        } else {
            format!("size-{raw}")
        }
    })
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let mut classes = Classes::new();
    if let Some(size) = size_class(props.size.as_ref()) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[function_component(IconArrowDown)]
pub(crate) fn icon_arrow_down(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M12 5v14m7-7l-7 7l-7-7" /> })
}

#[function_component(IconArrowUp)]
pub(crate) fn icon_arrow_up(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m5 12l7-7l7 7m-7 7V5" /> })
}

#[function_component(IconChevronDown)]
pub(crate) fn icon_chevron_down(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m6 9l6 6l6-6" /> })
}

#[function_component(IconChevronRight)]
pub(crate) fn icon_chevron_right(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m9 18l6-6l-6-6" /> })
}

#[function_component(IconMenu)]
pub(crate) fn icon_menu(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M4 6h16M4 12h16M4 18h16" /> })
}

#[function_component(IconLogOut)]
pub(crate) fn icon_log_out(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4m7 14l5-5l-5-5m5 5H9" /> },
    )
}

#[function_component(IconEye)]
pub(crate) fn icon_eye(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! {
            <>
                <path d="M2 12s3-7 10-7s10 7 10 7s-3 7-10 7s-10-7-10-7" />
                <circle cx="12" cy="12" r="3" />
            </>
        },
    )
}

#[function_component(IconPencil)]
pub(crate) fn icon_pencil(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5L2 22l1.5-5.5Zm-2 2l4 4" /> },
    )
}

#[function_component(IconTrash)]
pub(crate) fn icon_trash(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M3 6h18m-2 0v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6m3 0V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" /> },
    )
}

#[function_component(IconPlus)]
pub(crate) fn icon_plus(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M5 12h14m-7-7v14" /> })
}

#[function_component(IconPackage)]
pub(crate) fn icon_package(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="m7.5 4.27l9 5.15M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16ZM3.3 7L12 12l8.7-5M12 22V12" /> },
    )
}

#[function_component(IconUsers)]
pub(crate) fn icon_users(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8a4 4 0 0 0 0 8m13 10v-2a4 4 0 0 0-3-3.87m-3-12a4 4 0 0 1 0 7.75" /> },
    )
}

#[function_component(IconReceipt)]
pub(crate) fn icon_receipt(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M4 2v20l2-1l2 1l2-1l2 1l2-1l2 1l2-1l2 1V2l-2 1l-2-1l-2 1l-2-1l-2 1l-2-1l-2 1Zm12 6H8m8 4H8m5 4H8" /> },
    )
}

#[function_component(IconDollar)]
pub(crate) fn icon_dollar(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M12 2v20m5-17H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6" /> },
    )
}

#[function_component(IconHome)]
pub(crate) fn icon_home(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="m3 9l9-7l9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2Zm6 13V12h6v10" /> },
    )
}

#[function_component(IconSettings)]
pub(crate) fn icon_settings(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! {
            <>
                <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2" />
                <circle cx="12" cy="12" r="3" />
            </>
        },
    )
}
