use yew::prelude::*;

/// Props for icon-only buttons in rows and the header.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label, also shown as the tooltip.
    pub label: AttrValue,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Whether the button is disabled.
    #[prop_or_default]
    pub disabled: bool,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Icon content.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    html! {
        <button
            class={classes!("btn", "btn-ghost", "btn-sm", "btn-square", props.class.clone())}
            type="button"
            title={props.label.clone()}
            aria-label={props.label.clone()}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            {for props.children.iter()}
        </button>
    }
}
