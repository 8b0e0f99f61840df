//! Confirmation modal for destructive actions.
//!
//! # Design
//! - Visibility is owned by the caller; the dialog only reports intents.
//! - Clicking the backdrop counts as cancel.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::from("Xóa"))]
    pub confirm_label: AttrValue,
    #[prop_or(AttrValue::from("Hủy"))]
    pub cancel_label: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub(crate) fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let classes = classes!("modal", props.open.then_some("modal-open"));
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    html! {
        <div class={classes} role="dialog" aria-modal="true">
            <div class="modal-box">
                <h3 class="text-lg font-semibold">{props.title.clone()}</h3>
                <p class="py-4">{props.message.clone()}</p>
                <div class="modal-action">
                    <button class="btn btn-ghost" type="button" onclick={cancel.clone()} disabled={props.busy}>
                        {props.cancel_label.clone()}
                    </button>
                    <button class="btn btn-error" type="button" onclick={confirm} disabled={props.busy}>
                        {props.confirm_label.clone()}
                    </button>
                </div>
            </div>
            <button class="modal-backdrop" type="button" onclick={cancel}></button>
        </div>
    }
}
