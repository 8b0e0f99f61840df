use super::state::{PriceListForm, parse_id, validate};
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
use crate::core::format::{format_currency, format_datetime};
use crate::features::common::{
    Request, all_products, begin_submit, bind, choices, go, go_to, notify, notify_failure,
    product_choice, use_collection, use_delete_flow, use_options, use_prefill, use_record,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastKind;
use crate::services::api::ApiClient;
use salesdesk_api_models::{PriceListEntry, Product};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Navigator, use_navigator};

fn fetch_entries(client: Rc<ApiClient>, maspdv: String) -> Request<Vec<PriceListEntry>> {
    Box::pin(async move {
        if maspdv.is_empty() {
            client.price_lists().await
        } else {
            client.price_lists_for_product(&maspdv).await
        }
    })
}

fn fetch_entry(client: Rc<ApiClient>, id: String) -> Request<PriceListEntry> {
    Box::pin(async move {
        match parse_id(&id) {
            Some(id) => client.price_list(id).await,
            None => Err(ApiError::NotFound),
        }
    })
}

fn remove_entry(client: Rc<ApiClient>, id: i64) -> Request<()> {
    Box::pin(async move { client.delete_price_list(id).await })
}

fn product_name(products: &[Product], code: &str) -> String {
    products
        .iter()
        .find(|product| product.maspdv == code)
        .map_or_else(String::new, |product| product.tenspdv.clone())
}

#[function_component(PriceListPage)]
pub(crate) fn price_list_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let navigator = use_navigator();
    let product_filter = use_state(String::new);
    let products = use_options(all_products, "products.options");
    let (entries, reload) = use_collection(
        (*product_filter).clone(),
        fetch_entries,
        "price_lists.list",
        "Không thể tải bảng giá. Vui lòng thử lại sau.",
    );
    let deletion = use_delete_flow(
        remove_entry,
        "Xóa bảng giá thành công",
        "Không thể xóa bảng giá. Vui lòng thử lại sau.",
        reload,
    );

    let on_filter = {
        let product_filter = product_filter.clone();
        Callback::from(move |code: String| product_filter.set(code))
    };
    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| go(navigator.as_ref(), Route::PriceListCreate))
    };
    let rows = entries.data.clone().unwrap_or_default();

    let body = if entries.loading && entries.data.is_none() {
        html! { <ProgressLine label={bundle.text("common.loading", "Đang tải dữ liệu...")} /> }
    } else if let Some(message) = entries.error.clone() {
        html! { <div class="alert alert-error" role="alert">{message}</div> }
    } else if rows.is_empty() {
        html! {
            <EmptyState
                title={bundle.text("price_lists.empty", "Chưa có bảng giá nào")}
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
                            <th class="text-right">{"Giá bán"}</th>
                            <th class="text-right">{"Thao tác"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for rows.iter().map(|entry| {
                            let actions = entry.id.map(|id| {
                                let edit = {
                                    let navigator = navigator.clone();
                                    Callback::from(move |_| go(navigator.as_ref(), Route::PriceListEdit { id: id.to_string() }))
                                };
                                let remove = {
                                    let request = deletion.request.clone();
                                    Callback::from(move |_| request.emit(id))
                                };
                                html! {
                                    <>
                                        <IconButton label="Chỉnh sửa" onclick={edit}><IconPencil size="4" /></IconButton>
                                        <IconButton label="Xóa" class="text-error" onclick={remove}><IconTrash size="4" /></IconButton>
                                    </>
                                }
                            });
                            html! {
                                <tr>
                                    <td>
                                        <div class="font-medium">{entry.maspdv.clone()}</div>
                                        <div class="text-base-content/60 text-xs">{product_name(&products, &entry.maspdv)}</div>
                                    </td>
                                    <td>{format_datetime(entry.ngayhl)}</td>
                                    <td class="text-right">{format_currency(entry.giaban)}</td>
                                    <td class="text-right">{actions.unwrap_or_default()}</td>
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
            <PageHeader title={bundle.text("nav.price_lists", "Bảng giá")}>
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
                message="Bạn có chắc chắn muốn xóa bảng giá này?"
                busy={deletion.busy}
                on_confirm={deletion.confirm.clone()}
                on_cancel={deletion.cancel.clone()}
            />
        </>
    }
}

fn price_list_fields(
    form: &UseReducerHandle<FormState<PriceListForm>>,
    products: &[Product],
) -> Html {
    let values = &form.values;
    let errors = &form.errors;
    html! {
        <div class="grid gap-4 md:grid-cols-3">
            <SelectField
                label="Sản phẩm"
                value={values.maspdv.clone()}
                options={choices(products, product_choice)}
                placeholder="Chọn sản phẩm"
                on_change={bind(form, "maspdv", |f, v| f.maspdv = v)}
                error={error_for(errors, "maspdv")}
                disabled={form.submitting}
                required=true
            />
            <TextField
                label="Ngày hiệu lực"
                kind={InputKind::Date}
                value={values.ngayhl.clone()}
                on_change={bind(form, "ngayhl", |f, v| f.ngayhl = v)}
                error={error_for(errors, "ngayhl")}
                disabled={form.submitting}
                required=true
            />
            <TextField
                label="Giá bán"
                kind={InputKind::Number}
                value={values.giaban.clone()}
                on_change={bind(form, "giaban", |f, v| f.giaban = v)}
                error={error_for(errors, "giaban")}
                disabled={form.submitting}
                required=true
            />
        </div>
    }
}

/// Send the form; `id` is `Some` when editing an existing row.
fn save(
    form: &UseReducerHandle<FormState<PriceListForm>>,
    api: Option<ApiCtx>,
    navigator: Option<Navigator>,
    id: Option<i64>,
) {
    let (Some(values), Some(api)) = (begin_submit(form, validate), api) else {
        return;
    };
    let form = form.clone();
    spawn_local(async move {
        let result = match values.to_entry(id) {
            Some(entry) => match id {
                Some(id) => api.client.update_price_list(id, &entry).await,
                None => api.client.create_price_list(&entry).await,
            },
            None => Err(ApiError::Transport(
                "Dữ liệu bảng giá không hợp lệ".into(),
            )),
        };
        match result {
            Ok(()) => {
                let message = if id.is_some() {
                    "Cập nhật bảng giá thành công!"
                } else {
                    "Thêm bảng giá thành công!"
                };
                notify(ToastKind::Success, message);
                go(navigator.as_ref(), Route::PriceLists);
            }
            Err(err) => notify_failure(
                "price_lists.save",
                &err,
                "Có lỗi xảy ra khi lưu bảng giá. Vui lòng thử lại.",
            ),
        }
        form.dispatch(FormAction::Finish);
    });
}

#[function_component(PriceListCreatePage)]
pub(crate) fn price_list_create_page() -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let products = use_options(all_products, "products.options");
    let form = use_reducer(|| FormState::new(PriceListForm::default()));

    let submit = {
        let form = form.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| save(&form, api.clone(), navigator.clone(), None))
    };

    html! {
        <div class="mx-auto max-w-3xl">
            <PageHeader title="Thêm bảng giá mới" />
            <form class="card bg-base-100 shadow" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card-body">
                    {price_list_fields(&form, &products)}
                    <FormActions submitting={form.submitting} on_cancel={go_to(navigator, Route::PriceLists)} />
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PriceListEditProps {
    pub id: String,
}

#[function_component(PriceListEditPage)]
pub(crate) fn price_list_edit_page(props: &PriceListEditProps) -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let products = use_options(all_products, "products.options");
    let phase = use_record(
        props.id.clone(),
        fetch_entry,
        "price_lists.get",
        "Không thể tải thông tin bảng giá. Vui lòng thử lại sau.",
    );
    let form = use_reducer(|| FormState::new(PriceListForm::default()));
    use_prefill((*phase).clone(), form.clone(), PriceListForm::from_record);

    let back = go_to(navigator.clone(), Route::PriceLists);
    match &*phase {
        EditPhase::Loading => return html! { <FullPageLoader label="Đang tải thông tin bảng giá..." /> },
        EditPhase::NotFound => {
            return html! {
                <RecordUnavailable
                    not_found=true
                    message={format!("Không tìm thấy bảng giá với mã {}", props.id)}
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
        let id = parse_id(&props.id);
        Callback::from(move |()| save(&form, api.clone(), navigator.clone(), id))
    };

    html! {
        <div class="mx-auto max-w-3xl">
            <PageHeader title="Chỉnh sửa bảng giá" />
            <form class="card bg-base-100 shadow" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card-body">
                    {price_list_fields(&form, &products)}
                    <FormActions submitting={form.submitting} on_cancel={back} />
                </div>
            </form>
        </div>
    }
}
