use super::state::{InvoiceForm, PAYMENT_METHODS, matches, totals_consistent, validate};
use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::preferences::today;
use crate::components::atoms::icons::{IconEye, IconPlus, IconReceipt, IconTrash};
use crate::components::atoms::{
    ConfirmDialog, EmptyState, FullPageLoader, IconButton, PageHeader, ProgressLine,
    RecordUnavailable, SearchInput,
};
use crate::components::form::{
    FormActions, InputKind, SelectField, TextAreaField, TextField, error_for, on_submit,
};
use crate::core::api_error::ApiError;
use crate::core::edit::EditPhase;
use crate::core::form::{FormAction, FormState};
use crate::core::format::{
    format_currency, format_date, format_nullable, format_number, format_percent, money_in_words,
};
use crate::features::common::{
    Request, account_choice, all_accounts, all_customers, all_products, begin_submit, bind,
    choices, customer_choice, go, go_to, notify, notify_failure, use_collection, use_delete_flow,
    use_options, use_record,
};
use crate::features::line_editor::{LineEdit, LineEditor};
use crate::features::lines::{LineForm, edit_line, remove_line};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastKind;
use crate::services::api::ApiClient;
use salesdesk_api_models::{Customer, Invoice, InvoiceWithLines, Product};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

fn fetch_invoices(client: Rc<ApiClient>, _: String) -> Request<Vec<Invoice>> {
    Box::pin(async move { client.invoices().await })
}

fn fetch_invoice(client: Rc<ApiClient>, soct: String) -> Request<InvoiceWithLines> {
    Box::pin(async move { client.invoice(&soct).await })
}

fn remove_invoice(client: Rc<ApiClient>, soct: String) -> Request<()> {
    Box::pin(async move { client.delete_invoice(&soct).await })
}

#[function_component(InvoiceListPage)]
pub(crate) fn invoice_list_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let navigator = use_navigator();
    let keyword = use_state(String::new);
    let (invoices, reload) = use_collection(
        String::new(),
        fetch_invoices,
        "invoices.list",
        "Không thể tải danh sách hóa đơn. Vui lòng thử lại sau.",
    );
    let deletion = use_delete_flow(
        remove_invoice,
        "Xóa hóa đơn thành công",
        "Không thể xóa hóa đơn. Vui lòng thử lại sau.",
        reload,
    );

    let on_search = {
        let keyword = keyword.clone();
        Callback::from(move |value: String| keyword.set(value))
    };
    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| go(navigator.as_ref(), Route::InvoiceCreate))
    };
    let rows: Vec<Invoice> = invoices
        .data
        .iter()
        .flatten()
        .filter(|invoice| matches(invoice, &keyword))
        .cloned()
        .collect();

    let body = if invoices.loading && invoices.data.is_none() {
        html! { <ProgressLine label={bundle.text("common.loading", "Đang tải dữ liệu...")} /> }
    } else if let Some(message) = invoices.error.clone() {
        html! { <div class="alert alert-error" role="alert">{message}</div> }
    } else if rows.is_empty() {
        html! {
            <EmptyState
                title={bundle.text("invoices.empty", "Không có hóa đơn nào")}
                icon={html! { <IconReceipt size="10" /> }}
            />
        }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Số CT"}</th>
                            <th>{"Ngày lập"}</th>
                            <th>{"Khách hàng"}</th>
                            <th>{"Hình thức TT"}</th>
                            <th class="text-right">{"Tổng thanh toán"}</th>
                            <th class="text-right">{"Thao tác"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for rows.iter().map(|invoice| {
                            let view = {
                                let navigator = navigator.clone();
                                let soct = invoice.soct.clone();
                                Callback::from(move |_| go(navigator.as_ref(), Route::InvoiceDetail { id: soct.clone() }))
                            };
                            let remove = {
                                let request = deletion.request.clone();
                                let soct = invoice.soct.clone();
                                Callback::from(move |_| request.emit(soct.clone()))
                            };
                            html! {
                                <tr key={invoice.soct.clone()}>
                                    <td><span class="badge badge-soft badge-primary">{invoice.soct.clone()}</span></td>
                                    <td>{format_date(invoice.ngaylap.date())}</td>
                                    <td>
                                        <div class="font-medium">{invoice.tenkh.clone()}</div>
                                        <div class="text-base-content/60 text-xs">{invoice.makh.clone()}</div>
                                    </td>
                                    <td>{invoice.hinhthuctt.clone()}</td>
                                    <td class="text-right font-medium">{format_currency(invoice.tientt)}</td>
                                    <td class="text-right">
                                        <IconButton label="Xem chi tiết" onclick={view}><IconEye size="4" /></IconButton>
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
            <PageHeader title={bundle.text("nav.invoices", "Hóa đơn")}>
                <button class="btn btn-primary btn-sm" type="button" onclick={on_create}>
                    <IconPlus size="4" />
                    {bundle.text("invoices.create", "Tạo hóa đơn")}
                </button>
            </PageHeader>
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <SearchInput
                        placeholder={bundle.text("invoices.search", "Tìm theo số CT hoặc khách hàng...")}
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
                    "Bạn có chắc chắn muốn xóa hóa đơn {}?",
                    deletion.target.clone().unwrap_or_default()
                )}
                busy={deletion.busy}
                on_confirm={deletion.confirm.clone()}
                on_cancel={deletion.cancel.clone()}
            />
        </>
    }
}

fn select_customer(
    form: &UseReducerHandle<FormState<InvoiceForm>>,
    customers: Rc<Vec<Customer>>,
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |makh: String| {
        let tenkh = customers
            .iter()
            .find(|customer| customer.makh == makh)
            .map(|customer| customer.tenkh.clone())
            .unwrap_or_default();
        form.dispatch(FormAction::Set(
            "makh",
            Box::new(move |values: &mut InvoiceForm| {
                values.makh = makh;
                values.tenkh = tenkh;
            }),
        ));
    })
}

#[function_component(InvoiceCreatePage)]
pub(crate) fn invoice_create_page() -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let customers = Rc::new(use_options(all_customers, "customers.options"));
    let products = Rc::new(use_options(all_products, "products.options"));
    let accounts = use_options(all_accounts, "accounts.options");
    let form = use_reducer(|| FormState::new(InvoiceForm::new(today())));

    let on_line = {
        let form = form.clone();
        let products = Rc::clone(&products);
        Callback::from(move |(index, field, value): LineEdit| {
            let catalogue = Rc::clone(&products);
            form.dispatch(FormAction::Set(
                "items",
                Box::new(move |values: &mut InvoiceForm| {
                    edit_line(&mut values.lines, index, field, value, &catalogue);
                }),
            ));
        })
    };
    let on_add = {
        let form = form.clone();
        Callback::from(move |()| {
            form.dispatch(FormAction::Set(
                "items",
                Box::new(|values: &mut InvoiceForm| values.lines.push(LineForm::default())),
            ));
        })
    };
    let on_remove = {
        let form = form.clone();
        Callback::from(move |index: usize| {
            form.dispatch(FormAction::Set(
                "items",
                Box::new(move |values: &mut InvoiceForm| remove_line(&mut values.lines, index)),
            ));
        })
    };

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
                let result = match values.to_payload() {
                    Some(payload) => api.client.create_invoice(&payload).await,
                    None => Err(ApiError::Transport("invalid invoice input".into())),
                };
                match result {
                    Ok(()) => {
                        notify(ToastKind::Success, "Tạo hóa đơn thành công");
                        go(navigator.as_ref(), Route::Invoices);
                    }
                    Err(err) => {
                        notify_failure("invoices.create", &err, "Có lỗi xảy ra khi lưu hóa đơn");
                    }
                }
                form.dispatch(FormAction::Finish);
            });
        })
    };

    let values = &form.values;
    let errors = &form.errors;
    let busy = form.submitting;
    let totals = values.totals();
    let account_options = choices(&accounts, account_choice);
    let payment_options = PAYMENT_METHODS
        .iter()
        .map(|method| (AttrValue::from(*method), AttrValue::from(*method)))
        .collect::<Vec<_>>();

    html! {
        <div class="mx-auto flex max-w-5xl flex-col gap-6">
            <PageHeader title="Tạo hóa đơn mới" />
            <form class="flex flex-col gap-6" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Thông tin hóa đơn"}</h2>
                        <div class="grid gap-4 md:grid-cols-2">
                            <TextField label="Số chứng từ" value={values.soct.clone()}
                                on_change={bind(&form, "soct", |f, v| f.soct = v)}
                                error={error_for(errors, "soct")} disabled={busy} required=true />
                            <TextField label="Ngày lập" kind={InputKind::Date} value={values.ngaylap.clone()}
                                on_change={bind(&form, "ngaylap", |f, v| f.ngaylap = v)}
                                error={error_for(errors, "ngaylap")} disabled={busy} required=true />
                            <SelectField label="Khách hàng" value={values.makh.clone()}
                                options={choices(&customers, customer_choice)} placeholder="Chọn khách hàng"
                                on_change={select_customer(&form, Rc::clone(&customers))}
                                error={error_for(errors, "makh")} disabled={busy} required=true />
                            <SelectField label="Hình thức thanh toán" value={values.hinhthuctt.clone()}
                                options={payment_options}
                                on_change={bind(&form, "hinhthuctt", |f, v| f.hinhthuctt = v)}
                                error={error_for(errors, "hinhthuctt")} disabled={busy} required=true />
                            <div class="md:col-span-2">
                                <TextAreaField label="Diễn giải" value={values.diengiai.clone()} rows={2}
                                    on_change={bind(&form, "diengiai", |f, v| f.diengiai = v)} disabled={busy} />
                            </div>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Tài khoản hạch toán"}</h2>
                        <div class="grid gap-4 md:grid-cols-2">
                            <SelectField label="Tài khoản nợ" value={values.tkno.clone()}
                                options={account_options.clone()} placeholder="Chọn tài khoản"
                                on_change={bind(&form, "tkno", |f, v| f.tkno = v)}
                                error={error_for(errors, "tkno")} disabled={busy} required=true />
                            <SelectField label="Tài khoản có doanh thu" value={values.tkcodt.clone()}
                                options={account_options.clone()} placeholder="Chọn tài khoản"
                                on_change={bind(&form, "tkcodt", |f, v| f.tkcodt = v)}
                                error={error_for(errors, "tkcodt")} disabled={busy} required=true />
                            <SelectField label="Tài khoản có thuế" value={values.tkcothue.clone()}
                                options={account_options.clone()} placeholder="Chọn tài khoản"
                                on_change={bind(&form, "tkcothue", |f, v| f.tkcothue = v)}
                                error={error_for(errors, "tkcothue")} disabled={busy} required=true />
                            <SelectField label="Tài khoản chiết khấu" value={values.tkchietkhau.clone()}
                                options={account_options} placeholder="Không có"
                                on_change={bind(&form, "tkchietkhau", |f, v| f.tkchietkhau = v)}
                                disabled={busy} />
                            <TextField label="Thuế suất (%)" kind={InputKind::Number} value={values.thuesuat.clone()}
                                on_change={bind(&form, "thuesuat", |f, v| f.thuesuat = v)}
                                error={error_for(errors, "thuesuat")} disabled={busy} />
                            <TextField label="Tỷ lệ chiết khấu (%)" kind={InputKind::Number} value={values.tyleck.clone()}
                                on_change={bind(&form, "tyleck", |f, v| f.tyleck = v)}
                                error={error_for(errors, "tyleck")} disabled={busy} />
                        </div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Chi tiết hóa đơn"}</h2>
                        <LineEditor
                            lines={values.lines.clone()}
                            catalogue={(*products).clone()}
                            disabled={busy}
                            error={error_for(errors, "items")}
                            on_edit={on_line}
                            on_add={on_add}
                            on_remove={on_remove}
                        />
                        <div class="bg-base-200 ml-auto mt-4 w-full max-w-sm rounded-box p-4 text-sm">
                            {summary_row("Tiền hàng", format_currency(totals.tiendt))}
                            {summary_row(&format!("Thuế GTGT ({}%)", values.thuesuat), format_currency(totals.tienthue))}
                            {summary_row(&format!("Chiết khấu ({}%)", values.tyleck), format!("-{}", format_currency(totals.tienck)))}
                            <div class="mt-2 flex justify-between border-t border-base-300 pt-2 text-base font-bold">
                                <span>{"Tổng thanh toán"}</span>
                                <span class="text-success">{format_currency(totals.tientt)}</span>
                            </div>
                        </div>
                        <FormActions submitting={busy} on_cancel={go_to(navigator, Route::Invoices)}
                            submit_label="Tạo hóa đơn" />
                    </div>
                </div>
            </form>
        </div>
    }
}

fn summary_row(label: &str, value: String) -> Html {
    html! {
        <div class="flex justify-between py-1">
            <span class="text-base-content/70">{label.to_string()}</span>
            <span>{value}</span>
        </div>
    }
}

fn detail_field(label: &str, value: String) -> Html {
    html! {
        <div>
            <p class="text-base-content/60 text-sm">{label.to_string()}</p>
            <p class="font-medium">{value}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct InvoiceDetailProps {
    pub soct: String,
}

#[function_component(InvoiceDetailPage)]
pub(crate) fn invoice_detail_page(props: &InvoiceDetailProps) -> Html {
    let navigator = use_navigator();
    let products = use_options(all_products, "products.options");
    let phase = use_record(
        props.soct.clone(),
        fetch_invoice,
        "invoices.get",
        "Không thể tải thông tin hóa đơn. Vui lòng thử lại sau.",
    );
    let deletion = use_delete_flow(
        remove_invoice,
        "Xóa hóa đơn thành công",
        "Không thể xóa hóa đơn. Vui lòng thử lại sau.",
        go_to(navigator.clone(), Route::Invoices),
    );

    let back = go_to(navigator, Route::Invoices);
    let detail = match &*phase {
        EditPhase::Loading => return html! { <FullPageLoader label="Đang tải thông tin hóa đơn..." /> },
        EditPhase::NotFound => {
            return html! {
                <RecordUnavailable
                    not_found=true
                    message={format!("Không tìm thấy hóa đơn {}", props.soct)}
                    on_back={back}
                />
            };
        }
        EditPhase::Failed(message) => {
            return html! { <RecordUnavailable message={message.clone()} on_back={back} /> };
        }
        EditPhase::Ready(detail) => detail.clone(),
    };
    let header = &detail.hoa_don;
    let consistent = totals_consistent(header, &detail.chi_tiet);
    let product_name = |code: &str| -> String {
        products
            .iter()
            .find(|product| product.maspdv == code)
            .map_or_else(|| code.to_string(), |product: &Product| product.tenspdv.clone())
    };
    let on_back = Callback::from(move |_: MouseEvent| back.emit(()));
    let on_delete = {
        let request = deletion.request.clone();
        let soct = header.soct.clone();
        Callback::from(move |_: MouseEvent| request.emit(soct.clone()))
    };

    html! {
        <div class="mx-auto flex max-w-5xl flex-col gap-6">
            <PageHeader title={format!("Hóa đơn {}", header.soct)} subtitle={format_date(header.ngaylap.date())}>
                <button class="btn btn-ghost btn-sm" type="button" onclick={on_back}>{"Quay lại"}</button>
                <button class="btn btn-error btn-sm" type="button" onclick={on_delete}>
                    <IconTrash size="4" />
                    {"Xóa"}
                </button>
            </PageHeader>
            {(!consistent).then(|| html! {
                <div class="alert alert-warning" role="alert">
                    {"Tổng tiền của hóa đơn không khớp với chi tiết."}
                </div>
            }).unwrap_or_default()}
            <div class="card bg-base-100 shadow">
                <div class="card-body grid gap-4 md:grid-cols-3">
                    {detail_field("Khách hàng", format!("{} - {}", header.makh, header.tenkh))}
                    {detail_field("Hình thức thanh toán", header.hinhthuctt.clone())}
                    {detail_field("Diễn giải", format_nullable(header.diengiai.as_deref(), "-").to_string())}
                    {detail_field("Tài khoản nợ", header.tkno.clone())}
                    {detail_field("Tài khoản có doanh thu", header.tkcodt.clone())}
                    {detail_field("Tài khoản có thuế", header.tkcothue.clone())}
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Chi tiết hóa đơn"}</h2>
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"STT"}</th>
                                    <th>{"Sản phẩm"}</th>
                                    <th class="text-right">{"Số lượng"}</th>
                                    <th>{"ĐVT"}</th>
                                    <th class="text-right">{"Đơn giá"}</th>
                                    <th class="text-right">{"Thành tiền"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for detail.chi_tiet.iter().enumerate().map(|(index, line)| html! {
                                    <tr>
                                        <td>{(index + 1).to_string()}</td>
                                        <td>
                                            <div class="font-medium">{product_name(&line.maspdv)}</div>
                                            <div class="text-base-content/60 text-xs">{line.maspdv.clone()}</div>
                                        </td>
                                        <td class="text-right">{format_number(line.soluong, 0)}</td>
                                        <td>{line.dvt.clone()}</td>
                                        <td class="text-right">{format_currency(line.dongia)}</td>
                                        <td class="text-right">{format_currency(line.soluong * line.dongia)}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                    <div class="bg-base-200 ml-auto mt-4 w-full max-w-sm rounded-box p-4 text-sm">
                        {summary_row("Tiền hàng", format_currency(header.tiendt))}
                        {summary_row(&format!("Thuế GTGT ({})", format_percent(header.thuesuat, 0)), format_currency(header.tienthue))}
                        {summary_row(&format!("Chiết khấu ({})", format_percent(header.tyleck, 0)), format!("-{}", format_currency(header.tienck)))}
                        <div class="mt-2 flex justify-between border-t border-base-300 pt-2 text-base font-bold">
                            <span>{"Tổng thanh toán"}</span>
                            <span class="text-success">{format_currency(header.tientt)}</span>
                        </div>
                    </div>
                    <p class="mt-2 text-right text-sm italic">
                        {format!("Bằng chữ: {}", money_in_words(header.tientt))}
                    </p>
                </div>
            </div>
            <ConfirmDialog
                open={deletion.target.is_some()}
                title="Xác nhận xóa"
                message={format!("Bạn có chắc chắn muốn xóa hóa đơn {}?", header.soct)}
                busy={deletion.busy}
                on_confirm={deletion.confirm.clone()}
                on_cancel={deletion.cancel.clone()}
            />
        </div>
    }
}
