//! Table editor for document lines.

use super::lines::{LineField, LineForm};
use crate::components::atoms::IconButton;
use crate::components::atoms::icons::{IconPlus, IconTrash};
use crate::core::format::format_currency;
use salesdesk_api_models::Product;
use yew::prelude::*;

/// One line edit: index, input, new text.
pub(crate) type LineEdit = (usize, LineField, String);

#[derive(Properties, PartialEq)]
pub(crate) struct LineEditorProps {
    pub lines: Vec<LineForm>,
    pub catalogue: Vec<Product>,
    #[prop_or(true)]
    pub show_unit: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_edit: Callback<LineEdit>,
    pub on_add: Callback<()>,
    pub on_remove: Callback<usize>,
}

#[function_component(LineEditor)]
pub(crate) fn line_editor(props: &LineEditorProps) -> Html {
    let single = props.lines.len() <= 1;
    let input = |index: usize, field: LineField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_edit.emit((index, field, input.value()));
            }
        })
    };
    let pick = |index: usize| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_edit.emit((index, LineField::Product, select.value()));
            }
        })
    };
    let add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <div class="flex flex-col gap-2">
            <div class="overflow-x-auto">
                <table class="table table-sm">
                    <thead>
                        <tr>
                            <th class="min-w-56">{"Sản phẩm"}</th>
                            <th class="w-24">{"Số lượng"}</th>
                            {props.show_unit.then(|| html! { <th class="w-24">{"ĐVT"}</th> }).unwrap_or_default()}
                            <th class="w-36">{"Đơn giá"}</th>
                            <th class="text-right">{"Thành tiền"}</th>
                            <th />
                        </tr>
                    </thead>
                    <tbody>
                        {for props.lines.iter().enumerate().map(|(index, line)| {
                            let remove = {
                                let on_remove = props.on_remove.clone();
                                Callback::from(move |_| on_remove.emit(index))
                            };
                            html! {
                                <tr>
                                    <td>
                                        <select class="select select-bordered select-sm w-full"
                                            disabled={props.disabled} onchange={pick(index)}>
                                            <option value="" selected={line.maspdv.is_empty()}>{"Chọn sản phẩm"}</option>
                                            {for props.catalogue.iter().map(|product| html! {
                                                <option value={product.maspdv.clone()} selected={product.maspdv == line.maspdv}>
                                                    {format!("{} - {}", product.maspdv, product.tenspdv)}
                                                </option>
                                            })}
                                        </select>
                                    </td>
                                    <td>
                                        <input class="input input-bordered input-sm w-full" type="number" min="0" step="any"
                                            value={line.soluong.clone()} disabled={props.disabled}
                                            oninput={input(index, LineField::Quantity)} />
                                    </td>
                                    {props.show_unit.then(|| html! {
                                        <td>
                                            <input class="input input-bordered input-sm w-full"
                                                value={line.dvt.clone()} disabled={props.disabled}
                                                oninput={input(index, LineField::Unit)} />
                                        </td>
                                    }).unwrap_or_default()}
                                    <td>
                                        <input class="input input-bordered input-sm w-full" type="number" min="0" step="any"
                                            value={line.dongia.clone()} disabled={props.disabled}
                                            oninput={input(index, LineField::Price)} />
                                    </td>
                                    <td class="text-right font-medium">{format_currency(line.amount())}</td>
                                    <td class="text-right">
                                        <IconButton label="Xóa dòng" class="text-error"
                                            disabled={props.disabled || single} onclick={remove}>
                                            <IconTrash size="4" />
                                        </IconButton>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
            {props.error.clone().map(|message| html! {
                <div class="text-error text-sm">{message}</div>
            }).unwrap_or_default()}
            <div>
                <button class="btn btn-ghost btn-sm" type="button" disabled={props.disabled} onclick={add}>
                    <IconPlus size="4" />
                    {"Thêm dòng"}
                </button>
            </div>
        </div>
    }
}
