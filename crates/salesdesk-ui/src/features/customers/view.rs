use super::state::{CLASSIFICATIONS, CustomerForm, validate};
use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::atoms::icons::{IconPencil, IconPlus, IconTrash, IconUsers};
use crate::components::atoms::{
    ConfirmDialog, EmptyState, FullPageLoader, IconButton, PageHeader, ProgressLine,
    RecordUnavailable, SearchInput,
};
use crate::components::form::{
    FormActions, InputKind, SelectField, TextField, error_for, on_submit,
};
use crate::core::edit::EditPhase;
use crate::core::form::{FormAction, FormState};
use crate::core::format::{DEFAULT_PLACEHOLDER, format_currency, format_nullable, format_phone};
use crate::features::common::{
    Request, begin_submit, bind, go, go_to, notify, notify_failure, use_collection,
    use_delete_flow, use_prefill, use_record,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastKind;
use crate::services::api::ApiClient;
use gloo::console;
use salesdesk_api_models::{Customer, EntityStats};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

fn fetch_customers(client: Rc<ApiClient>, keyword: String) -> Request<Vec<Customer>> {
    Box::pin(async move {
        if keyword.trim().is_empty() {
            client.customers().await
        } else {
            client.search_customers(keyword.trim()).await
        }
    })
}

fn fetch_customer(client: Rc<ApiClient>, code: String) -> Request<Customer> {
    Box::pin(async move { client.customer(&code).await })
}

fn remove_customer(client: Rc<ApiClient>, code: String) -> Request<()> {
    Box::pin(async move { client.delete_customer(&code).await })
}

#[function_component(CustomerListPage)]
pub(crate) fn customer_list_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let navigator = use_navigator();
    let keyword = use_state(String::new);
    let (customers, reload) = use_collection(
        (*keyword).clone(),
        fetch_customers,
        "customers.list",
        "Không thể tải danh sách khách hàng. Vui lòng thử lại sau.",
    );
    let deletion = use_delete_flow(
        remove_customer,
        "Xóa khách hàng thành công",
        "Không thể xóa khách hàng. Vui lòng thử lại sau.",
        reload,
    );

    let on_search = {
        let keyword = keyword.clone();
        Callback::from(move |value: String| keyword.set(value))
    };
    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| go(navigator.as_ref(), Route::CustomerCreate))
    };
    let rows = customers.data.clone().unwrap_or_default();

    let body = if customers.loading && customers.data.is_none() {
        html! { <ProgressLine label={bundle.text("common.loading", "Đang tải dữ liệu...")} /> }
    } else if let Some(message) = customers.error.clone() {
        html! { <div class="alert alert-error" role="alert">{message}</div> }
    } else if rows.is_empty() {
        html! {
            <EmptyState
                title={bundle.text("customers.empty", "Không có khách hàng nào")}
                icon={html! { <IconUsers size="10" /> }}
            />
        }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Mã KH"}</th>
                            <th>{"Tên khách hàng"}</th>
                            <th>{"Địa chỉ"}</th>
                            <th>{"Điện thoại"}</th>
                            <th>{"Email"}</th>
                            <th class="text-right">{"Thao tác"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for rows.iter().map(|customer| {
                            let edit = {
                                let navigator = navigator.clone();
                                let code = customer.makh.clone();
                                Callback::from(move |_| go(navigator.as_ref(), Route::CustomerEdit { id: code.clone() }))
                            };
                            let remove = {
                                let request = deletion.request.clone();
                                let code = customer.makh.clone();
                                Callback::from(move |_| request.emit(code.clone()))
                            };
                            html! {
                                <tr key={customer.makh.clone()}>
                                    <td><span class="badge badge-soft badge-primary">{customer.makh.clone()}</span></td>
                                    <td>
                                        <div class="font-medium">{customer.tenkh.clone()}</div>
                                        {customer.phanloai.clone().map(|kind| html! {
                                            <div class="text-base-content/60 text-xs">{kind}</div>
                                        }).unwrap_or_default()}
                                    </td>
                                    <td>{customer.diachi.clone()}</td>
                                    <td>{customer.sdt.as_deref().map_or_else(|| DEFAULT_PLACEHOLDER.to_string(), format_phone)}</td>
                                    <td>{format_nullable(customer.email.as_deref(), DEFAULT_PLACEHOLDER).to_string()}</td>
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
            <PageHeader title={bundle.text("nav.customers", "Khách hàng")}>
                <button class="btn btn-primary btn-sm" type="button" onclick={on_create}>
                    <IconPlus size="4" />
                    {bundle.text("common.create", "Thêm mới")}
                </button>
            </PageHeader>
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <SearchInput
                        placeholder={bundle.text("customers.search", "Tìm kiếm khách hàng...")}
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
                    "Bạn có chắc chắn muốn xóa khách hàng {}?",
                    deletion.target.clone().unwrap_or_default()
                )}
                busy={deletion.busy}
                on_confirm={deletion.confirm.clone()}
                on_cancel={deletion.cancel.clone()}
            />
        </>
    }
}

fn customer_fields(form: &UseReducerHandle<FormState<CustomerForm>>, code_locked: bool) -> Html {
    let values = &form.values;
    let errors = &form.errors;
    let classifications = CLASSIFICATIONS
        .iter()
        .map(|kind| (AttrValue::from(*kind), AttrValue::from(*kind)))
        .collect::<Vec<_>>();
    html! {
        <div class="grid gap-4 md:grid-cols-2">
            <TextField
                label="Mã khách hàng"
                value={values.makh.clone()}
                on_change={bind(form, "makh", |f, v| f.makh = v)}
                error={error_for(errors, "makh")}
                disabled={code_locked || form.submitting}
                required=true
            />
            <TextField
                label="Tên khách hàng"
                value={values.tenkh.clone()}
                on_change={bind(form, "tenkh", |f, v| f.tenkh = v)}
                error={error_for(errors, "tenkh")}
                disabled={form.submitting}
                required=true
            />
            <TextField
                class="md:col-span-2"
                label="Địa chỉ"
                value={values.diachi.clone()}
                on_change={bind(form, "diachi", |f, v| f.diachi = v)}
                error={error_for(errors, "diachi")}
                disabled={form.submitting}
                required=true
            />
            <TextField
                label="Số điện thoại"
                kind={InputKind::Tel}
                value={values.sdt.clone()}
                on_change={bind(form, "sdt", |f, v| f.sdt = v)}
                error={error_for(errors, "sdt")}
                disabled={form.submitting}
            />
            <TextField
                label="Email"
                kind={InputKind::Email}
                value={values.email.clone()}
                on_change={bind(form, "email", |f, v| f.email = v)}
                error={error_for(errors, "email")}
                disabled={form.submitting}
            />
            <TextField
                label="Mã số thuế"
                value={values.masothue.clone()}
                on_change={bind(form, "masothue", |f, v| f.masothue = v)}
                disabled={form.submitting}
            />
            <SelectField
                label="Phân loại"
                value={values.phanloai.clone()}
                options={classifications}
                placeholder="Chọn phân loại"
                on_change={bind(form, "phanloai", |f, v| f.phanloai = v)}
                disabled={form.submitting}
            />
        </div>
    }
}

#[function_component(CustomerCreatePage)]
pub(crate) fn customer_create_page() -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let form = use_reducer(|| FormState::new(CustomerForm::default()));

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
                match api.client.create_customer(&values.to_record()).await {
                    Ok(()) => {
                        notify(ToastKind::Success, "Thêm khách hàng thành công!");
                        go(navigator.as_ref(), Route::Customers);
                    }
                    Err(err) => notify_failure(
                        "customers.create",
                        &err,
                        "Lỗi khi tạo khách hàng. Vui lòng thử lại.",
                    ),
                }
                form.dispatch(FormAction::Finish);
            });
        })
    };

    html! {
        <div class="mx-auto max-w-3xl">
            <PageHeader title="Thêm khách hàng mới" />
            <form class="card bg-base-100 shadow" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card-body">
                    {customer_fields(&form, false)}
                    <FormActions submitting={form.submitting} on_cancel={go_to(navigator, Route::Customers)} />
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CustomerEditProps {
    pub code: String,
}

#[function_component(CustomerEditPage)]
pub(crate) fn customer_edit_page(props: &CustomerEditProps) -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let phase = use_record(
        props.code.clone(),
        fetch_customer,
        "customers.get",
        "Không thể tải thông tin khách hàng. Vui lòng thử lại sau.",
    );
    let form = use_reducer(|| FormState::new(CustomerForm::default()));
    use_prefill((*phase).clone(), form.clone(), CustomerForm::from_record);
    let stats = use_state(|| None::<EntityStats>);
    {
        let stats = stats.clone();
        let api = api.clone();
        use_effect_with(props.code.clone(), move |code| {
            let code = code.clone();
            if let Some(api) = api {
                spawn_local(async move {
                    match api.client.customer_stats(&code).await {
                        Ok(found) => stats.set(Some(found)),
                        Err(err) => console::log!("customer stats unavailable", err.to_string()),
                    }
                });
            }
        });
    }

    let back = go_to(navigator.clone(), Route::Customers);
    match &*phase {
        EditPhase::Loading => {
            return html! { <FullPageLoader label="Đang tải thông tin khách hàng..." /> };
        }
        EditPhase::NotFound => {
            return html! {
                <RecordUnavailable
                    not_found=true
                    message={format!("Không tìm thấy khách hàng với mã {}", props.code)}
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
                match api.client.update_customer(&code, &values.to_record()).await {
                    Ok(()) => {
                        notify(ToastKind::Success, "Cập nhật khách hàng thành công!");
                        go(navigator.as_ref(), Route::Customers);
                    }
                    Err(err) => notify_failure(
                        "customers.update",
                        &err,
                        "Lỗi khi cập nhật khách hàng. Vui lòng thử lại.",
                    ),
                }
                form.dispatch(FormAction::Finish);
            });
        })
    };

    html! {
        <div class="mx-auto flex max-w-3xl flex-col gap-6">
            <PageHeader title="Chỉnh sửa khách hàng" subtitle={props.code.clone()} />
            {(*stats).clone().map(|stats| html! {
                <div class="stats bg-base-100 shadow">
                    <div class="stat">
                        <div class="stat-title">{"Doanh thu"}</div>
                        <div class="stat-value text-primary text-2xl">{format_currency(stats.total_revenue)}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Số hóa đơn"}</div>
                        <div class="stat-value text-2xl">{stats.invoice_count.to_string()}</div>
                    </div>
                </div>
            }).unwrap_or_default()}
            <form class="card bg-base-100 shadow" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card-body">
                    {customer_fields(&form, true)}
                    <FormActions submitting={form.submitting} on_cancel={back} />
                </div>
            </form>
        </div>
    }
}
