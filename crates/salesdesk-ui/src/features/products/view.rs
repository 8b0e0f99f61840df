use super::state::{ProductForm, validate};
use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::atoms::icons::{IconEye, IconPackage, IconPencil, IconPlus, IconTrash};
use crate::components::atoms::{
    ConfirmDialog, EmptyState, FullPageLoader, IconButton, PageHeader, ProgressLine,
    RecordUnavailable, SearchInput,
};
use crate::components::form::{FormActions, InputKind, TextAreaField, TextField, error_for, on_submit};
use crate::core::edit::EditPhase;
use crate::core::form::{FormAction, FormState};
use crate::core::format::{
    DEFAULT_PLACEHOLDER, DEFAULT_TRUNCATE, format_currency, format_nullable, format_number,
    truncate_text,
};
use crate::features::common::{
    Request, begin_submit, bind, go, go_to, notify, notify_failure, use_collection,
    use_delete_flow, use_prefill, use_record,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastKind;
use crate::services::api::ApiClient;
use gloo::console;
use salesdesk_api_models::{EntityStats, Product};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

fn fetch_products(client: Rc<ApiClient>, keyword: String) -> Request<Vec<Product>> {
    Box::pin(async move { client.products(Some(&keyword)).await })
}

fn fetch_product(client: Rc<ApiClient>, code: String) -> Request<Product> {
    Box::pin(async move { client.product(&code).await })
}

fn remove_product(client: Rc<ApiClient>, code: String) -> Request<()> {
    Box::pin(async move { client.delete_product(&code).await })
}

#[function_component(ProductListPage)]
pub(crate) fn product_list_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let navigator = use_navigator();
    let keyword = use_state(String::new);
    let (products, reload) = use_collection(
        (*keyword).clone(),
        fetch_products,
        "products.list",
        "Không thể tải danh sách sản phẩm. Vui lòng thử lại sau.",
    );
    let deletion = use_delete_flow(
        remove_product,
        "Xóa sản phẩm thành công",
        "Không thể xóa sản phẩm. Vui lòng thử lại sau.",
        reload,
    );

    let on_search = {
        let keyword = keyword.clone();
        Callback::from(move |value: String| keyword.set(value))
    };
    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| go(navigator.as_ref(), Route::ProductCreate))
    };
    let rows = products.data.clone().unwrap_or_default();

    let body = if products.loading && products.data.is_none() {
        html! { <ProgressLine label={bundle.text("common.loading", "Đang tải dữ liệu...")} /> }
    } else if let Some(message) = products.error.clone() {
        html! { <div class="alert alert-error" role="alert">{message}</div> }
    } else if rows.is_empty() {
        html! {
            <EmptyState
                title={bundle.text("products.empty", "Không có sản phẩm nào")}
                icon={html! { <IconPackage size="10" /> }}
            />
        }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Mã SP"}</th>
                            <th>{"Tên sản phẩm/dịch vụ"}</th>
                            <th>{"Đơn vị tính"}</th>
                            <th class="text-right">{"Đơn giá"}</th>
                            <th>{"Mô tả"}</th>
                            <th class="text-right">{"Thao tác"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for rows.iter().map(|product| {
                            let code = product.maspdv.clone();
                            let view = {
                                let navigator = navigator.clone();
                                let code = code.clone();
                                Callback::from(move |_| go(navigator.as_ref(), Route::ProductDetail { id: code.clone() }))
                            };
                            let edit = {
                                let navigator = navigator.clone();
                                let code = code.clone();
                                Callback::from(move |_| go(navigator.as_ref(), Route::ProductEdit { id: code.clone() }))
                            };
                            let remove = {
                                let request = deletion.request.clone();
                                Callback::from(move |_| request.emit(code.clone()))
                            };
                            html! {
                                <tr key={product.maspdv.clone()}>
                                    <td><span class="badge badge-soft badge-primary">{product.maspdv.clone()}</span></td>
                                    <td>{product.tenspdv.clone()}</td>
                                    <td>{product.dvt.clone()}</td>
                                    <td class="text-right">{format_currency(product.dongia)}</td>
                                    <td class="text-base-content/70 text-sm">
                                        {product.mota.as_deref().map_or_else(
                                            || DEFAULT_PLACEHOLDER.to_string(),
                                            |text| truncate_text(text, DEFAULT_TRUNCATE),
                                        )}
                                    </td>
                                    <td class="text-right">
                                        <IconButton label="Xem chi tiết" onclick={view}><IconEye size="4" /></IconButton>
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
            <PageHeader title={bundle.text("nav.products", "Sản phẩm dịch vụ")}>
                <button class="btn btn-primary btn-sm" type="button" onclick={on_create}>
                    <IconPlus size="4" />
                    {bundle.text("common.create", "Thêm mới")}
                </button>
            </PageHeader>
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <SearchInput
                        placeholder={bundle.text("products.search", "Tìm kiếm sản phẩm...")}
                        on_search={on_search}
                        class="w-full max-w-sm"
                    />
                    {body}
                </div>
            </div>
            <ConfirmDialog
                open={deletion.target.is_some()}
                title="Xác nhận xóa"
                message={format!(
                    "Bạn có chắc chắn muốn xóa sản phẩm {}?",
                    deletion.target.clone().unwrap_or_default()
                )}
                busy={deletion.busy}
                on_confirm={deletion.confirm.clone()}
                on_cancel={deletion.cancel.clone()}
            />
        </>
    }
}

fn product_fields(form: &UseReducerHandle<FormState<ProductForm>>, code_locked: bool) -> Html {
    let values = &form.values;
    let errors = &form.errors;
    html! {
        <div class="grid gap-4 md:grid-cols-2">
            <TextField
                label="Mã sản phẩm"
                value={values.maspdv.clone()}
                on_change={bind(form, "maspdv", |f, v| f.maspdv = v)}
                error={error_for(errors, "maspdv")}
                disabled={code_locked || form.submitting}
                required=true
            />
            <TextField
                label="Tên sản phẩm/dịch vụ"
                value={values.tenspdv.clone()}
                on_change={bind(form, "tenspdv", |f, v| f.tenspdv = v)}
                error={error_for(errors, "tenspdv")}
                disabled={form.submitting}
                required=true
            />
            <TextField
                label="Đơn vị tính"
                value={values.dvt.clone()}
                on_change={bind(form, "dvt", |f, v| f.dvt = v)}
                error={error_for(errors, "dvt")}
                disabled={form.submitting}
                required=true
            />
            <TextField
                label="Đơn giá"
                kind={InputKind::Number}
                value={values.dongia.clone()}
                on_change={bind(form, "dongia", |f, v| f.dongia = v)}
                error={error_for(errors, "dongia")}
                disabled={form.submitting}
                required=true
            />
            <div class="md:col-span-2">
                <TextAreaField
                    label="Mô tả"
                    value={values.mota.clone()}
                    on_change={bind(form, "mota", |f, v| f.mota = v)}
                    disabled={form.submitting}
                />
            </div>
        </div>
    }
}

#[function_component(ProductCreatePage)]
pub(crate) fn product_create_page() -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let form = use_reducer(|| FormState::new(ProductForm::default()));

    {
        let form = form.clone();
        let api = api.clone();
        use_effect_with((), move |()| {
            if let Some(api) = api {
                spawn_local(async move {
                    match api.client.next_product_code().await {
                        Ok(code) => form.dispatch(FormAction::Set(
                            "maspdv",
                            Box::new(move |values: &mut ProductForm| values.maspdv = code),
                        )),
                        Err(err) => notify_failure(
                            "products.next_code",
                            &err,
                            "Không thể lấy mã sản phẩm mới. Vui lòng thử lại.",
                        ),
                    }
                });
            }
        });
    }

    let submit = {
        let form = form.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            let (Some(values), Some(api)) = (begin_submit(&form, validate), api.clone()) else {
                return;
            };
            let form = form.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match api.client.create_product(&values.to_payload(true)).await {
                    Ok(()) => {
                        notify(ToastKind::Success, "Thêm sản phẩm thành công!");
                        go(navigator.as_ref(), Route::Products);
                    }
                    Err(err) => notify_failure(
                        "products.create",
                        &err,
                        "Lỗi khi tạo sản phẩm. Vui lòng thử lại.",
                    ),
                }
                form.dispatch(FormAction::Finish);
            });
        })
    };

    html! {
        <div class="mx-auto max-w-3xl">
            <PageHeader title="Thêm sản phẩm dịch vụ mới" />
            <form class="card bg-base-100 shadow" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card-body">
                    {product_fields(&form, false)}
                    <FormActions submitting={form.submitting} on_cancel={go_to(navigator, Route::Products)} />
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ProductPageProps {
    pub code: String,
}

#[function_component(ProductEditPage)]
pub(crate) fn product_edit_page(props: &ProductPageProps) -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let phase = use_record(
        props.code.clone(),
        fetch_product,
        "products.get",
        "Không thể tải thông tin sản phẩm. Vui lòng thử lại sau.",
    );
    let form = use_reducer(|| FormState::new(ProductForm::default()));
    use_prefill((*phase).clone(), form.clone(), ProductForm::from_record);

    let back = go_to(navigator.clone(), Route::Products);
    match &*phase {
        EditPhase::Loading => return html! { <FullPageLoader label="Đang tải thông tin sản phẩm..." /> },
        EditPhase::NotFound => {
            return html! {
                <RecordUnavailable
                    not_found=true
                    message={format!("Không tìm thấy sản phẩm với mã {}", props.code)}
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
        let code = props.code.clone();
        Callback::from(move |()| {
            let (Some(values), Some(api)) = (begin_submit(&form, validate), api.clone()) else {
                return;
            };
            let form = form.clone();
            let navigator = navigator.clone();
            let code = code.clone();
            spawn_local(async move {
                match api.client.update_product(&code, &values.to_payload(false)).await {
                    Ok(()) => {
                        notify(ToastKind::Success, "Cập nhật sản phẩm thành công!");
                        go(navigator.as_ref(), Route::Products);
                    }
                    Err(err) => notify_failure(
                        "products.update",
                        &err,
                        "Lỗi khi cập nhật sản phẩm. Vui lòng thử lại.",
                    ),
                }
                form.dispatch(FormAction::Finish);
            });
        })
    };

    html! {
        <div class="mx-auto max-w-3xl">
            <PageHeader title="Chỉnh sửa sản phẩm dịch vụ" subtitle={props.code.clone()} />
            <form class="card bg-base-100 shadow" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card-body">
                    {product_fields(&form, true)}
                    <FormActions submitting={form.submitting} on_cancel={back} />
                </div>
            </form>
        </div>
    }
}

#[function_component(ProductDetailPage)]
pub(crate) fn product_detail_page(props: &ProductPageProps) -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let phase = use_record(
        props.code.clone(),
        fetch_product,
        "products.get",
        "Không thể tải thông tin sản phẩm. Vui lòng thử lại sau.",
    );
    let stats = use_state(|| None::<EntityStats>);
    {
        let stats = stats.clone();
        use_effect_with(props.code.clone(), move |code| {
            let code = code.clone();
            if let Some(api) = api {
                spawn_local(async move {
                    match api.client.product_stats(&code).await {
                        Ok(found) => stats.set(Some(found)),
                        Err(err) => console::log!("product stats unavailable", err.to_string()),
                    }
                });
            }
        });
    }

    let back = go_to(navigator.clone(), Route::Products);
    let product = match &*phase {
        EditPhase::Loading => return html! { <FullPageLoader label="Đang tải thông tin sản phẩm..." /> },
        EditPhase::NotFound => {
            return html! {
                <RecordUnavailable
                    not_found=true
                    message={format!("Không tìm thấy sản phẩm với mã {}", props.code)}
                    on_back={back}
                />
            };
        }
        EditPhase::Failed(message) => {
            return html! { <RecordUnavailable message={message.clone()} on_back={back} /> };
        }
        EditPhase::Ready(product) => product.clone(),
    };

    let on_edit = {
        let code = props.code.clone();
        Callback::from(move |_: MouseEvent| go(navigator.as_ref(), Route::ProductEdit { id: code.clone() }))
    };
    let on_back = Callback::from(move |_: MouseEvent| back.emit(()));

    html! {
        <div class="mx-auto flex max-w-3xl flex-col gap-6">
            <PageHeader title={product.tenspdv.clone()} subtitle={product.maspdv.clone()}>
                <button class="btn btn-ghost btn-sm" type="button" onclick={on_back}>{"Quay lại"}</button>
                <button class="btn btn-primary btn-sm" type="button" onclick={on_edit}>
                    <IconPencil size="4" />
                    {"Chỉnh sửa"}
                </button>
            </PageHeader>
            <div class="card bg-base-100 shadow">
                <div class="card-body grid gap-4 md:grid-cols-2">
                    <div>
                        <p class="text-base-content/60 text-sm">{"Đơn giá:"}</p>
                        <p class="text-lg font-semibold">{format_currency(product.dongia)}</p>
                    </div>
                    <div>
                        <p class="text-base-content/60 text-sm">{"Đơn vị tính:"}</p>
                        <p class="text-lg font-semibold">{product.dvt.clone()}</p>
                    </div>
                    <div class="md:col-span-2">
                        <p class="text-base-content/60 text-sm">{"Mô tả:"}</p>
                        <p>{format_nullable(product.mota.as_deref(), DEFAULT_PLACEHOLDER).to_string()}</p>
                    </div>
                </div>
            </div>
            {(*stats).clone().map(|stats| html! {
                <div class="stats bg-base-100 shadow">
                    <div class="stat">
                        <div class="stat-title">{"Doanh thu"}</div>
                        <div class="stat-value text-primary text-2xl">{format_currency(stats.total_revenue)}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Số lượng bán"}</div>
                        <div class="stat-value text-2xl">
                            {stats.total_quantity.map_or_else(|| DEFAULT_PLACEHOLDER.to_string(), |qty| format_number(qty, 0))}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Số hóa đơn"}</div>
                        <div class="stat-value text-2xl">{stats.invoice_count.to_string()}</div>
                    </div>
                </div>
            }).unwrap_or_default()}
        </div>
    }
}
