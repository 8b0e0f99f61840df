//! Terminal states of keyed pages.
//!
//! # Design
//! - Offer navigation back to the list and nothing else; there is no retry.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RecordUnavailableProps {
    pub message: AttrValue,
    pub on_back: Callback<()>,
    #[prop_or_default]
    pub not_found: bool,
    #[prop_or(AttrValue::from("Quay lại danh sách"))]
    pub back_label: AttrValue,
}

#[function_component(RecordUnavailable)]
pub(crate) fn record_unavailable(props: &RecordUnavailableProps) -> Html {
    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };
    html! {
        <div class="mx-auto flex max-w-xl flex-col items-center gap-4 p-6 text-center">
            <div
                class={classes!("alert", "w-full", if props.not_found { "alert-warning" } else { "alert-error" })}
                role="alert"
            >
                {props.message.clone()}
            </div>
            <button class="btn btn-primary" type="button" onclick={back}>{props.back_label.clone()}</button>
        </div>
    }
}
