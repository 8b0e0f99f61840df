use super::state::{TAX_RATES, VoucherForm, matches, validate};
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
use crate::core::format::{format_currency, format_date, format_nullable, format_number, money_in_words};
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
use salesdesk_api_models::{Invoice, Voucher, VoucherWithLines};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

fn fetch_vouchers(client: Rc<ApiClient>, _: String) -> Request<Vec<Voucher>> {
    Box::pin(async move { client.vouchers().await })
}

fn fetch_invoices(client: Rc<ApiClient>, _: String) -> Request<Vec<Invoice>> {
    Box::pin(async move { client.invoices().await })
}

fn fetch_voucher(client: Rc<ApiClient>, sophieu: String) -> Request<VoucherWithLines> {
    Box::pin(async move { client.voucher(&sophieu).await })
}

fn remove_voucher(client: Rc<ApiClient>, sophieu: String) -> Request<()> {
    Box::pin(async move { client.delete_voucher(&sophieu).await })
}

#[function_component(VoucherListPage)]
pub(crate) fn voucher_list_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let navigator = use_navigator();
    let keyword = use_state(String::new);
    let (vouchers, reload) = use_collection(
        String::new(),
        fetch_vouchers,
        "vouchers.list",
        "Không thể tải danh sách phiếu giảm giá. Vui lòng thử lại sau.",
    );
    let deletion = use_delete_flow(
        remove_voucher,
        "Xóa phiếu giảm giá thành công",
        "Không thể xóa phiếu giảm giá. Vui lòng thử lại sau.",
        reload,
    );

    let on_search = {
        let keyword = keyword.clone();
        Callback::from(move |value: String| keyword.set(value))
    };
    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| go(navigator.as_ref(), Route::VoucherCreate))
    };
    let rows: Vec<Voucher> = vouchers
        .data
        .iter()
        .flatten()
        .filter(|voucher| matches(voucher, &keyword))
        .cloned()
        .collect();

    let body = if vouchers.loading && vouchers.data.is_none() {
        html! { <ProgressLine label={bundle.text("common.loading", "Đang tải dữ liệu...")} /> }
    } else if let Some(message) = vouchers.error.clone() {
        html! { <div class="alert alert-error" role="alert">{message}</div> }
    } else if rows.is_empty() {
        html! {
            <EmptyState
                title={bundle.text("vouchers.empty", "Không có phiếu giảm giá nào")}
                icon={html! { <IconReceipt size="10" /> }}
            />
        }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Số phiếu"}</th>
                            <th>{"Ngày lập"}</th>
                            <th>{"Khách hàng"}</th>
                            <th>{"Hóa đơn"}</th>
                            <th class="text-right">{"Tổng tiền"}</th>
                            <th class="text-right">{"Thao tác"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for rows.iter().map(|voucher| {
                            let view = {
                                let navigator = navigator.clone();
                                let sophieu = voucher.sophieu.clone();
                                Callback::from(move |_| go(navigator.as_ref(), Route::VoucherDetail { id: sophieu.clone() }))
                            };
                            let remove = {
                                let request = deletion.request.clone();
                                let sophieu = voucher.sophieu.clone();
                                Callback::from(move |_| request.emit(sophieu.clone()))
                            };
                            html! {
                                <tr key={voucher.sophieu.clone()}>
                                    <td><span class="badge badge-soft badge-secondary">{voucher.sophieu.clone()}</span></td>
                                    <td>{format_date(voucher.ngaylap.date())}</td>
                                    <td>{voucher.makh.clone()}</td>
                                    <td>{voucher.soct.clone()}</td>
                                    <td class="text-right font-medium">{format_currency(voucher.tientt)}</td>
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
            <PageHeader title={bundle.text("nav.vouchers", "Phiếu giảm giá")}>
                <button class="btn btn-primary btn-sm" type="button" onclick={on_create}>
                    <IconPlus size="4" />
                    {bundle.text("vouchers.create", "Tạo phiếu")}
                </button>
            </PageHeader>
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <SearchInput
                        placeholder={bundle.text("vouchers.search", "Tìm theo số phiếu, hóa đơn...")}
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
                    "Bạn có chắc chắn muốn xóa phiếu {}?",
                    deletion.target.clone().unwrap_or_default()
                )}
                busy={deletion.busy}
                on_confirm={deletion.confirm.clone()}
                on_cancel={deletion.cancel.clone()}
            />
        </>
    }
}

/// Choosing an invoice also selects its customer.
fn select_invoice(
    form: &UseReducerHandle<FormState<VoucherForm>>,
    invoices: Rc<Vec<Invoice>>,
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |soct: String| {
        let makh = invoices
            .iter()
            .find(|invoice| invoice.soct == soct)
            .map(|invoice| invoice.makh.clone());
        form.dispatch(FormAction::Set(
            "soct",
            Box::new(move |values: &mut VoucherForm| {
                values.soct = soct;
                if let Some(makh) = makh {
                    values.makh = makh;
                }
            }),
        ));
    })
}

#[function_component(VoucherCreatePage)]
pub(crate) fn voucher_create_page() -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let customers = use_options(all_customers, "customers.options");
    let invoices = Rc::new(use_options(fetch_invoices, "invoices.options"));
    let products = Rc::new(use_options(all_products, "products.options"));
    let accounts = use_options(all_accounts, "accounts.options");
    let form = use_reducer(|| FormState::new(VoucherForm::new(today())));

    {
        let form = form.clone();
        let api = api.clone();
        use_effect_with((), move |()| {
            if let Some(api) = api {
                spawn_local(async move {
                    match api.client.next_voucher_code().await {
                        Ok(code) => form.dispatch(FormAction::Set(
                            "sophieu",
                            Box::new(move |values: &mut VoucherForm| values.sophieu = code),
                        )),
                        Err(err) => notify_failure(
                            "vouchers.next_code",
                            &err,
                            "Không thể lấy số phiếu mới. Vui lòng nhập thủ công.",
                        ),
                    }
                });
            }
        });
    }

    let on_line = {
        let form = form.clone();
        let products = Rc::clone(&products);
        Callback::from(move |(index, field, value): LineEdit| {
            let catalogue = Rc::clone(&products);
            form.dispatch(FormAction::Set(
                "items",
                Box::new(move |values: &mut VoucherForm| {
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
                Box::new(|values: &mut VoucherForm| values.lines.push(LineForm::default())),
            ));
        })
    };
    let on_remove = {
        let form = form.clone();
        Callback::from(move |index: usize| {
            form.dispatch(FormAction::Set(
                "items",
                Box::new(move |values: &mut VoucherForm| remove_line(&mut values.lines, index)),
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
                    Some(payload) => api.client.create_voucher(&payload).await,
                    None => Err(ApiError::Transport("invalid voucher input".into())),
                };
                match result {
                    Ok(()) => {
                        notify(ToastKind::Success, "Tạo phiếu giảm giá mới thành công");
                        go(navigator.as_ref(), Route::Vouchers);
                    }
                    Err(err) => notify_failure(
                        "vouchers.create",
                        &err,
                        "Lỗi khi lưu phiếu giảm giá. Vui lòng thử lại.",
                    ),
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
    let invoice_options = invoices
        .iter()
        .map(|invoice| {
            (
                AttrValue::from(invoice.soct.clone()),
                AttrValue::from(format!("{} - {}", invoice.soct, invoice.tenkh)),
            )
        })
        .collect::<Vec<_>>();
    let tax_options = TAX_RATES
        .iter()
        .map(|rate| (AttrValue::from(*rate), AttrValue::from(format!("{rate}%"))))
        .collect::<Vec<_>>();

    html! {
        <div class="mx-auto flex max-w-5xl flex-col gap-6">
            <PageHeader title="Tạo phiếu giảm giá" />
            <form class="flex flex-col gap-6" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="grid gap-4 md:grid-cols-3">
                            <TextField label="Số phiếu" value={values.sophieu.clone()}
                                on_change={bind(&form, "sophieu", |f, v| f.sophieu = v)}
                                error={error_for(errors, "sophieu")} disabled={busy} required=true />
                            <TextField label="Ngày lập" kind={InputKind::Date} value={values.ngaylap.clone()}
                                on_change={bind(&form, "ngaylap", |f, v| f.ngaylap = v)}
                                error={error_for(errors, "ngaylap")} disabled={busy} required=true />
                            <SelectField label="Hóa đơn" value={values.soct.clone()}
                                options={invoice_options} placeholder="Chọn hóa đơn"
                                on_change={select_invoice(&form, Rc::clone(&invoices))}
                                error={error_for(errors, "soct")} disabled={busy} required=true />
                            <SelectField label="Khách hàng" value={values.makh.clone()}
                                options={choices(&customers, customer_choice)} placeholder="Chọn khách hàng"
                                on_change={bind(&form, "makh", |f, v| f.makh = v)}
                                error={error_for(errors, "makh")} disabled={busy} required=true />
                            <SelectField label="TK nợ giảm trừ" value={values.tknogiamtru.clone()}
                                options={account_options.clone()} placeholder="Chọn tài khoản"
                                on_change={bind(&form, "tknogiamtru", |f, v| f.tknogiamtru = v)}
                                error={error_for(errors, "tknogiamtru")} disabled={busy} required=true />
                            <SelectField label="TK có thanh toán" value={values.tkcott.clone()}
                                options={account_options.clone()} placeholder="Chọn tài khoản"
                                on_change={bind(&form, "tkcott", |f, v| f.tkcott = v)}
                                error={error_for(errors, "tkcott")} disabled={busy} required=true />
                            <SelectField label="TK nợ thuế" value={values.tknothue.clone()}
                                options={account_options} placeholder="Chọn tài khoản"
                                on_change={bind(&form, "tknothue", |f, v| f.tknothue = v)}
                                error={error_for(errors, "tknothue")} disabled={busy} required=true />
                            <SelectField label="Thuế suất (%)" value={values.thuesuat.clone()}
                                options={tax_options}
                                on_change={bind(&form, "thuesuat", |f, v| f.thuesuat = v)}
                                error={error_for(errors, "thuesuat")} disabled={busy} required=true />
                            <TextAreaField label="Diễn giải" value={values.diengiai.clone()} rows={1}
                                on_change={bind(&form, "diengiai", |f, v| f.diengiai = v)} disabled={busy} />
                        </div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Chi tiết phiếu"}</h2>
                        <LineEditor
                            lines={values.lines.clone()}
                            catalogue={(*products).clone()}
                            show_unit=false
                            disabled={busy}
                            error={error_for(errors, "items")}
                            on_edit={on_line}
                            on_add={on_add}
                            on_remove={on_remove}
                        />
                        <div class="stats stats-vertical md:stats-horizontal mt-4 shadow-sm">
                            <div class="stat">
                                <div class="stat-title">{"Tổng tiền hàng"}</div>
                                <div class="stat-value text-lg">{format_currency(totals.tiendt)}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">{"Tiền thuế"}</div>
                                <div class="stat-value text-lg">{format_currency(totals.tienthue)}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">{"Tổng thanh toán"}</div>
                                <div class="stat-value text-success text-lg">{format_currency(totals.tientt)}</div>
                            </div>
                        </div>
                        <FormActions submitting={busy} on_cancel={go_to(navigator, Route::Vouchers)} />
                    </div>
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct VoucherDetailProps {
    pub sophieu: String,
}

#[function_component(VoucherDetailPage)]
pub(crate) fn voucher_detail_page(props: &VoucherDetailProps) -> Html {
    let navigator = use_navigator();
    let phase = use_record(
        props.sophieu.clone(),
        fetch_voucher,
        "vouchers.get",
        "Không thể tải thông tin phiếu giảm giá. Vui lòng thử lại sau.",
    );
    let deletion = use_delete_flow(
        remove_voucher,
        "Xóa phiếu giảm giá thành công",
        "Không thể xóa phiếu giảm giá. Vui lòng thử lại sau.",
        go_to(navigator.clone(), Route::Vouchers),
    );

    let back = go_to(navigator, Route::Vouchers);
    let detail = match &*phase {
        EditPhase::Loading => return html! { <FullPageLoader label="Đang tải phiếu giảm giá..." /> },
        EditPhase::NotFound => {
            return html! {
                <RecordUnavailable
                    not_found=true
                    message={format!("Không tìm thấy phiếu giảm giá {}", props.sophieu)}
                    on_back={back}
                />
            };
        }
        EditPhase::Failed(message) => {
            return html! { <RecordUnavailable message={message.clone()} on_back={back} /> };
        }
        EditPhase::Ready(detail) => detail.clone(),
    };
    let header = &detail.header;
    let on_back = Callback::from(move |_: MouseEvent| back.emit(()));
    let on_delete = {
        let request = deletion.request.clone();
        let sophieu = header.sophieu.clone();
        Callback::from(move |_: MouseEvent| request.emit(sophieu.clone()))
    };
    let field = |label: &str, value: String| html! {
        <div>
            <p class="text-base-content/60 text-sm">{label.to_string()}</p>
            <p class="font-medium">{value}</p>
        </div>
    };

    html! {
        <div class="mx-auto flex max-w-5xl flex-col gap-6">
            <PageHeader title={format!("Phiếu giảm giá {}", header.sophieu)} subtitle={format_date(header.ngaylap.date())}>
                <button class="btn btn-ghost btn-sm" type="button" onclick={on_back}>{"Quay lại"}</button>
                <button class="btn btn-error btn-sm" type="button" onclick={on_delete}>
                    <IconTrash size="4" />
                    {"Xóa"}
                </button>
            </PageHeader>
            <div class="card bg-base-100 shadow">
                <div class="card-body grid gap-4 md:grid-cols-3">
                    {field("Khách hàng", header.makh.clone())}
                    {field("Hóa đơn", header.soct.clone())}
                    {field("Diễn giải", format_nullable(header.diengiai.as_deref(), "-").to_string())}
                    {field("TK nợ giảm trừ", header.tknogiamtru.clone())}
                    {field("TK có thanh toán", header.tkcott.clone())}
                    {field("TK nợ thuế", header.tknothue.clone())}
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Sản phẩm"}</th>
                                    <th class="text-right">{"Số lượng"}</th>
                                    <th class="text-right">{"Đơn giá"}</th>
                                    <th class="text-right">{"Thành tiền"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for detail.chi_tiet.iter().map(|line| html! {
                                    <tr>
                                        <td>{line.maspdv.clone()}</td>
                                        <td class="text-right">{format_number(line.soluong, 0)}</td>
                                        <td class="text-right">{format_currency(line.dongia)}</td>
                                        <td class="text-right">{format_currency(line.soluong * line.dongia)}</td>
                                    </tr>
                                })}
                            </tbody>
                            <tfoot>
                                <tr>
                                    <th colspan="3">{"Tổng tiền hàng"}</th>
                                    <th class="text-right">{format_currency(header.tiendt)}</th>
                                </tr>
                                <tr>
                                    <th colspan="3">{format!("Tiền thuế ({}%)", format_number(header.thuesuat, 0))}</th>
                                    <th class="text-right">{format_currency(header.tienthue)}</th>
                                </tr>
                                <tr>
                                    <th colspan="3">{"Tổng thanh toán"}</th>
                                    <th class="text-success text-right">{format_currency(header.tientt)}</th>
                                </tr>
                            </tfoot>
                        </table>
                    </div>
                    <p class="mt-2 text-right text-sm italic">
                        {format!("Bằng chữ: {}", money_in_words(header.tientt))}
                    </p>
                </div>
            </div>
            <ConfirmDialog
                open={deletion.target.is_some()}
                title="Xác nhận xóa"
                message={format!("Bạn có chắc chắn muốn xóa phiếu {}?", header.sophieu)}
                busy={deletion.busy}
                on_confirm={deletion.confirm.clone()}
                on_cancel={deletion.cancel.clone()}
            />
        </div>
    }
}
