//! Form controls with inline validation messages.
//!
//! # Design
//! - Controls are fully controlled: the page owns the value and receives every edit.
//! - A field renders its error under the control and marks itself invalid.

use yew::prelude::*;

/// Input flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum InputKind {
    #[default]
    Text,
    Number,
    Date,
    Email,
    Password,
    Tel,
}

impl InputKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub kind: InputKind,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TextField)]
pub(crate) fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };
    let invalid = props.error.is_some();
    html! {
        <label class={classes!("form-control", "w-full", props.class.clone())}>
            {field_label(&props.label, props.required)}
            <input
                class={classes!("input", "input-bordered", "w-full", invalid.then_some("input-error"))}
                type={props.kind.as_str()}
                step={(props.kind == InputKind::Number).then_some("any")}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                aria-invalid={invalid.then_some("true")}
                {oninput}
            />
            {field_error(props.error.as_ref())}
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TextAreaFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(3)]
    pub rows: u32,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextAreaField)]
pub(crate) fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                on_change.emit(area.value());
            }
        })
    };
    html! {
        <label class="form-control w-full">
            {field_label(&props.label, false)}
            <textarea
                class={classes!("textarea", "textarea-bordered", "w-full", props.error.is_some().then_some("textarea-error"))}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                disabled={props.disabled}
                {oninput}
            />
            {field_error(props.error.as_ref())}
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// `(value, label)` pairs in display order.
    pub options: Vec<(AttrValue, AttrValue)>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SelectField)]
pub(crate) fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_change.emit(select.value());
            }
        })
    };
    html! {
        <label class={classes!("form-control", "w-full", props.class.clone())}>
            {field_label(&props.label, props.required)}
            <select
                class={classes!("select", "select-bordered", "w-full", props.error.is_some().then_some("select-error"))}
                disabled={props.disabled}
                {onchange}
            >
                {props.placeholder.clone().map(|text| html! {
                    <option value="" selected={props.value.is_empty()}>{text}</option>
                }).unwrap_or_default()}
                {for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>{label.clone()}</option>
                })}
            </select>
            {field_error(props.error.as_ref())}
        </label>
    }
}

fn field_label(label: &AttrValue, required: bool) -> Html {
    html! {
        <div class="label">
            <span class="label-text">
                {label.clone()}
                {if required { html! { <span class="text-error">{" *"}</span> } } else { html! {} }}
            </span>
        </div>
    }
}

fn field_error(error: Option<&AttrValue>) -> Html {
    error
        .map(|message| html! {
            <div class="label"><span class="label-text-alt text-error">{message.clone()}</span></div>
        })
        .unwrap_or_default()
}

/// Error for `field` as an attribute value.
pub(crate) fn error_for(errors: &crate::core::form::FieldErrors, field: &str) -> Option<AttrValue> {
    errors.get(field).map(|message| AttrValue::from(message.to_string()))
}

#[derive(Properties, PartialEq)]
pub(crate) struct FormActionsProps {
    pub submitting: bool,
    pub on_cancel: Callback<()>,
    #[prop_or(AttrValue::from("Lưu"))]
    pub submit_label: AttrValue,
    #[prop_or(AttrValue::from("Hủy"))]
    pub cancel_label: AttrValue,
}

/// Cancel and submit buttons at the foot of an editor.
#[function_component(FormActions)]
pub(crate) fn form_actions(props: &FormActionsProps) -> Html {
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    html! {
        <div class="mt-6 flex justify-end gap-2">
            <button class="btn btn-ghost" type="button" onclick={cancel} disabled={props.submitting}>
                {props.cancel_label.clone()}
            </button>
            <button class="btn btn-primary" type="submit" disabled={props.submitting}>
                {if props.submitting {
                    html! { <span class="loading loading-spinner loading-sm" /> }
                } else {
                    html! {}
                }}
                {props.submit_label.clone()}
            </button>
        </div>
    }
}

/// Submit handler that suppresses the browser's own form submission.
pub(crate) fn on_submit(submit: Callback<()>) -> Callback<SubmitEvent> {
    Callback::from(move |event: SubmitEvent| {
        event.prevent_default();
        submit.emit(());
    })
}
