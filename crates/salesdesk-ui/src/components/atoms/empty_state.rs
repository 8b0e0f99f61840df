//! Empty state panel for list-like views.
//!
//! # Design
//! - Keep copy and actions entirely prop-driven.
//! - Render the icon slot and actions only when provided.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let has_actions = props.children.iter().next().is_some();
    html! {
        <div class={classes!("flex", "flex-col", "items-center", "gap-2", "p-6", "text-center", props.class.clone())}>
            {props.icon.clone().map(|icon| html! {
                <div class="text-base-content/40">{icon}</div>
            }).unwrap_or_default()}
            <p class="text-base-content/70 font-medium">{props.title.clone()}</p>
            {props.description.clone().map(|text| html! {
                <p class="text-base-content/60 text-sm">{text}</p>
            }).unwrap_or_default()}
            {if has_actions {
                html! { <div class="mt-2 flex gap-2">{ for props.children.iter() }</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
