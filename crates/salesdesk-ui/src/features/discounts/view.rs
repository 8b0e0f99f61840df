use super::state::{DiscountForm, record_key, route_key, split_record_key, validate};
use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::atoms::icons::{IconDollar, IconPencil, IconPlus, IconTrash};
use crate::components::atoms::{
    ConfirmDialog, EmptyState, FullPageLoader, IconButton, PageHeader, ProgressLine,
    RecordUnavailable,
};
use crate::components::form::{
    FormActions, InputKind, SelectField, TextField, error_for, on_submit,
};
use crate::core::api_error::ApiError;
use crate::core::edit::EditPhase;
use crate::core::form::{FormAction, FormState};
use crate::core::format::{format_currency, format_date, format_percent};
use crate::features::common::{
    Request, all_products, begin_submit, bind, choices, go, go_to, notify, notify_failure,
    product_choice, use_collection, use_delete_flow, use_options, use_prefill, use_record,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastKind;
use crate::services::api::ApiClient;
use chrono::NaiveDate;
use salesdesk_api_models::{DiscountSchedule, Product};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Navigator, use_navigator};

fn fetch_schedules(client: Rc<ApiClient>, maspdv: String) -> Request<Vec<DiscountSchedule>> {
    Box::pin(async move {
        if maspdv.is_empty() {
            client.discounts().await
        } else {
            client.discounts_for_product(&maspdv).await
        }
    })
}

fn fetch_schedule(client: Rc<ApiClient>, key: String) -> Request<DiscountSchedule> {
    Box::pin(async move {
        match split_record_key(&key) {
            Some((maspdv, date)) => client.discount(maspdv, date).await,
            None => Err(ApiError::NotFound),
        }
    })
}

fn remove_schedule(client: Rc<ApiClient>, key: (String, NaiveDate)) -> Request<()> {
    Box::pin(async move { client.delete_discount(&key.0, key.1).await })
}

#[function_component(DiscountListPage)]
pub(crate) fn discount_list_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let navigator = use_navigator();
    let product_filter = use_state(String::new);
    let products = use_options(all_products, "products.options");
    let (schedules, reload) = use_collection(
        (*product_filter).clone(),
        fetch_schedules,
        "discounts.list",
        "Không thể tải định mức chiết khấu. Vui lòng thử lại sau.",
    );
    let deletion = use_delete_flow(
        remove_schedule,
        "Xóa định mức chiết khấu thành công",
        "Không thể xóa định mức chiết khấu. Vui lòng thử lại sau.",
        reload,
    );

    let on_filter = {
        let product_filter = product_filter.clone();
        Callback::from(move |code: String| product_filter.set(code))
    };
    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| go(navigator.as_ref(), Route::DiscountCreate))
    };
    let rows = schedules.data.clone().unwrap_or_default();

    let body = if schedules.loading && schedules.data.is_none() {
        html! { <ProgressLine label={bundle.text("common.loading", "Đang tải dữ liệu...")} /> }
    } else if let Some(message) = schedules.error.clone() {
        html! { <div class="alert alert-error" role="alert">{message}</div> }
    } else if rows.is_empty() {
        html! {
            <EmptyState
                title={bundle.text("discounts.empty", "Chưa có định mức chiết khấu nào")}
                icon={html! { <IconDollar size="10" /> }}
            />
        }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Sản phẩm"}</th>
                            <th>{"Ngày hiệu lực"}</th>
                            <th class="text-right">{"Mức tiền"}</th>
                            <th class="text-right">{"Tỷ lệ CK"}</th>
                            <th class="text-right">{"Thao tác"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for rows.iter().map(|schedule| {
                            let (code, date) = route_key(schedule);
                            let edit = {
                                let navigator = navigator.clone();
                                let route = Route::DiscountEdit { maspdv: code.clone(), date };
                                Callback::from(move |_| go(navigator.as_ref(), route.clone()))
                            };
                            let remove = {
                                let request = deletion.request.clone();
                                let key = (code.clone(), schedule.ngayhl.date());
                                Callback::from(move |_| request.emit(key.clone()))
                            };
                            html! {
                                <tr key={record_key(&code, &schedule.ngayhl.date().to_string())}>
                                    <td><span class="badge badge-soft badge-primary">{code.clone()}</span></td>
                                    <td>{format_date(schedule.ngayhl.date())}</td>
                                    <td class="text-right">{format_currency(schedule.muctien)}</td>
                                    <td class="text-right">{format_percent(schedule.tyleck, 2)}</td>
                                    <td class="text-right">
                                        <IconButton label="Chỉnh sửa" onclick={edit}><IconPencil size="4" /></IconButton>
                                        <IconButton label="Xóa" class="text-error" onclick={remove}><IconTrash size="4" /></IconButton>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <>
            <PageHeader title={bundle.text("nav.discounts", "Định mức chiết khấu")}>
                <button class="btn btn-primary btn-sm" type="button" onclick={on_create}>
                    <IconPlus size="4" />
                    {bundle.text("common.create", "Thêm mới")}
                </button>
            </PageHeader>
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <SelectField
                        class="max-w-sm"
                        label="Lọc theo sản phẩm"
                        value={(*product_filter).clone()}
                        options={choices(&products, product_choice)}
                        placeholder="Tất cả sản phẩm"
                        on_change={on_filter}
                    />
                    {body}
                </div>
            </div>
            <ConfirmDialog
                open={deletion.target.is_some()}
                title="Xác nhận xóa"
                message="Bạn có chắc chắn muốn xóa định mức chiết khấu này?"
                busy={deletion.busy}
                on_confirm={deletion.confirm.clone()}
                on_cancel={deletion.cancel.clone()}
            />
        </>
    }
}

fn discount_fields(
    form: &UseReducerHandle<FormState<DiscountForm>>,
    products: &[Product],
    key_locked: bool,
) -> Html {
    let values = &form.values;
    let errors = &form.errors;
    html! {
        <div class="grid gap-4 md:grid-cols-2">
            <SelectField
                label="Sản phẩm"
                value={values.maspdv.clone()}
                options={choices(products, product_choice)}
                placeholder="Chọn sản phẩm"
                on_change={bind(form, "maspdv", |f, v| f.maspdv = v)}
                error={error_for(errors, "maspdv")}
                disabled={key_locked || form.submitting}
                required=true
            />
            <TextField
                label="Ngày hiệu lực"
                kind={InputKind::Date}
                value={values.ngayhl.clone()}
                on_change={bind(form, "ngayhl", |f, v| f.ngayhl = v)}
                error={error_for(errors, "ngayhl")}
                disabled={key_locked || form.submitting}
                required=true
            />
            <TextField
                label="Mức tiền"
                kind={InputKind::Number}
                value={values.muctien.clone()}
                on_change={bind(form, "muctien", |f, v| f.muctien = v)}
                error={error_for(errors, "muctien")}
                disabled={form.submitting}
                required=true
            />
            <TextField
                label="Tỷ lệ chiết khấu (%)"
                kind={InputKind::Number}
                value={values.tyleck.clone()}
                on_change={bind(form, "tyleck", |f, v| f.tyleck = v)}
                error={error_for(errors, "tyleck")}
                disabled={form.submitting}
                required=true
            />
        </div>
    }
}

/// Send the form; `key` is the addressed schedule when editing.
fn save(
    form: &UseReducerHandle<FormState<DiscountForm>>,
    api: Option<ApiCtx>,
    navigator: Option<Navigator>,
    key: Option<(String, NaiveDate)>,
) {
    let (Some(values), Some(api)) = (begin_submit(form, validate), api) else {
        return;
    };
    let form = form.clone();
    spawn_local(async move {
        let editing = key.is_some();
        let result = match (values.to_schedule(), key) {
            (Some(schedule), Some((maspdv, date))) => {
                api.client.update_discount(&maspdv, date, &schedule).await
            }
            (Some(schedule), None) => api.client.create_discount(&schedule).await,
            (None, _) => Err(ApiError::Transport("invalid discount schedule".into())),
        };
        match result {
            Ok(()) => {
                let message = if editing {
                    "Cập nhật định mức chiết khấu thành công!"
                } else {
                    "Thêm định mức chiết khấu thành công!"
                };
                notify(ToastKind::Success, message);
                go(navigator.as_ref(), Route::Discounts);
            }
            Err(err) => notify_failure(
                "discounts.save",
                &err,
                "Có lỗi xảy ra khi lưu định mức chiết khấu. Vui lòng thử lại.",
            ),
        }
        form.dispatch(FormAction::Finish);
    });
}

#[function_component(DiscountCreatePage)]
pub(crate) fn discount_create_page() -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let products = use_options(all_products, "products.options");
    let form = use_reducer(|| FormState::new(DiscountForm::default()));

    let submit = {
        let form = form.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| save(&form, api.clone(), navigator.clone(), None))
    };

    html! {
        <div class="mx-auto max-w-3xl">
            <PageHeader title="Thêm định mức chiết khấu" />
            <form class="card bg-base-100 shadow" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card-body">
                    {discount_fields(&form, &products, false)}
                    <FormActions submitting={form.submitting} on_cancel={go_to(navigator, Route::Discounts)} />
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct DiscountEditProps {
    pub maspdv: String,
    pub date: String,
}

#[function_component(DiscountEditPage)]
pub(crate) fn discount_edit_page(props: &DiscountEditProps) -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let products = use_options(all_products, "products.options");
    let key = record_key(&props.maspdv, &props.date);
    let phase = use_record(
        key.clone(),
        fetch_schedule,
        "discounts.get",
        "Không thể tải định mức chiết khấu. Vui lòng thử lại sau.",
    );
    let form = use_reducer(|| FormState::new(DiscountForm::default()));
    use_prefill((*phase).clone(), form.clone(), DiscountForm::from_record);

    let back = go_to(navigator.clone(), Route::Discounts);
    match &*phase {
        EditPhase::Loading => {
            return html! { <FullPageLoader label="Đang tải định mức chiết khấu..." /> };
        }
        EditPhase::NotFound => {
            return html! {
                <RecordUnavailable
                    not_found=true
                    message={format!("Không tìm thấy định mức chiết khấu {key}")}
                    on_back={back}
                />
            };
        }
        EditPhase::Failed(message) => {
            return html! { <RecordUnavailable message={message.clone()} on_back={back} /> };
        }
        EditPhase::Ready(_) => {}
    }

    let submit = {
        let form = form.clone();
        let addressed = split_record_key(&key).map(|(maspdv, date)| (maspdv.to_string(), date));
        Callback::from(move |()| save(&form, api.clone(), navigator.clone(), addressed.clone()))
    };

    html! {
        <div class="mx-auto max-w-3xl">
            <PageHeader title="Chỉnh sửa định mức chiết khấu" subtitle={props.maspdv.clone()} />
            <form class="card bg-base-100 shadow" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card-body">
                    {discount_fields(&form, &products, true)}
                    <FormActions submitting={form.submitting} on_cancel={back} />
                </div>
            </form>
        </div>
    }
}
