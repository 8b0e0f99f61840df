use super::state::{
    AccountForm, AccountQuery, AccountSort, MAX_LEVEL, indent_px, level_colors, validate,
};
use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::atoms::icons::{IconDollar, IconPencil, IconPlus, IconTrash};
use crate::components::atoms::{
    ConfirmDialog, EmptyState, IconButton, PageHeader, ProgressLine, SearchInput,
};
use crate::components::form::{
    FormActions, SelectField, TextField, error_for, on_submit,
};
use crate::core::api_error::ApiError;
use crate::core::form::{FormAction, FormState};
use crate::features::common::{
    Request, begin_submit, bind, go, go_to, notify, notify_failure, use_collection,
    use_delete_flow,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastKind;
use crate::services::api::ApiClient;
use salesdesk_api_models::Account;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

fn fetch_accounts(client: Rc<ApiClient>, _: String) -> Request<Vec<Account>> {
    Box::pin(async move { client.accounts().await })
}

fn remove_account(client: Rc<ApiClient>, matk: String) -> Request<()> {
    Box::pin(async move { client.delete_account(&matk).await })
}

fn level_options() -> Vec<(AttrValue, AttrValue)> {
    (1..=MAX_LEVEL)
        .map(|level| (AttrValue::from(level.to_string()), AttrValue::from(format!("Cấp {level}"))))
        .collect()
}

#[derive(Properties, PartialEq)]
pub(crate) struct AccountTableProps {
    pub accounts: Vec<Account>,
    pub on_edit: Callback<Account>,
    pub on_delete: Callback<Account>,
}

/// Presentational account table; rows emit edit and delete intents.
#[function_component(AccountTable)]
pub(crate) fn account_table(props: &AccountTableProps) -> Html {
    if props.accounts.is_empty() {
        return html! {
            <p class="text-base-content/60 py-8 text-center">{"Không có dữ liệu tài khoản"}</p>
        };
    }
    html! {
        <div class="overflow-x-auto">
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Mã tài khoản"}</th>
                        <th>{"Tên tài khoản"}</th>
                        <th>{"Cấp"}</th>
                        <th class="text-right">{"Thao tác"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.accounts.iter().map(|account| {
                        let colors = level_colors(account.captk);
                        let edit = {
                            let on_edit = props.on_edit.clone();
                            let account = account.clone();
                            Callback::from(move |_| on_edit.emit(account.clone()))
                        };
                        let remove = {
                            let on_delete = props.on_delete.clone();
                            let account = account.clone();
                            Callback::from(move |_| on_delete.emit(account.clone()))
                        };
                        html! {
                            <tr key={account.matk.clone()}>
                                <td>
                                    <span class="font-mono font-medium"
                                        style={format!("padding-left: {}px", indent_px(account.captk))}>
                                        {account.matk.clone()}
                                    </span>
                                </td>
                                <td>{account.tentk.clone()}</td>
                                <td>
                                    <span class="badge border-0"
                                        style={format!("background-color: {}; color: {}", colors.background, colors.foreground)}>
                                        {format!("Cấp {}", account.captk)}
                                    </span>
                                </td>
                                <td class="text-right">
                                    <IconButton label="Sửa" onclick={edit}><IconPencil size="4" /></IconButton>
                                    <IconButton label="Xóa" class="text-error" onclick={remove}><IconTrash size="4" /></IconButton>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn account_fields(
    form: &UseReducerHandle<FormState<AccountForm>>,
    code_locked: bool,
) -> Html {
    let values = &form.values;
    let errors = &form.errors;
    let busy = form.submitting;
    html! {
        <div class="grid gap-4">
            <TextField label="Mã tài khoản" value={values.matk.clone()} placeholder="Nhập mã tài khoản"
                on_change={bind(form, "matk", |f, v| f.matk = v)}
                error={error_for(errors, "matk")} disabled={busy || code_locked} required=true />
            <TextField label="Tên tài khoản" value={values.tentk.clone()} placeholder="Nhập tên tài khoản"
                on_change={bind(form, "tentk", |f, v| f.tentk = v)}
                error={error_for(errors, "tentk")} disabled={busy} required=true />
            <SelectField label="Cấp tài khoản" value={values.captk.clone()} options={level_options()}
                placeholder="Chọn cấp tài khoản"
                on_change={bind(form, "captk", |f, v| f.captk = v)}
                error={error_for(errors, "captk")} disabled={busy} required=true />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AccountEditDialogProps {
    account: Option<Account>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
}

#[function_component(AccountEditDialog)]
fn account_edit_dialog(props: &AccountEditDialogProps) -> Html {
    let api = use_context::<ApiCtx>();
    let form = use_reducer(|| FormState::new(AccountForm::default()));
    {
        let form = form.clone();
        use_effect_with(props.account.clone(), move |account| {
            if let Some(account) = account {
                form.dispatch(FormAction::Load(AccountForm::from_record(account)));
            }
        });
    }

    let submit = {
        let form = form.clone();
        let on_saved = props.on_saved.clone();
        let original = props.account.clone();
        Callback::from(move |()| {
            let (Some(values), Some(api), Some(original)) =
                (begin_submit(&form, validate), api.clone(), original.clone())
            else {
                return;
            };
            let form = form.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = match values.to_record() {
                    Some(record) => api.client.update_account(&original.matk, &record).await,
                    None => Err(ApiError::Transport("invalid account level".into())),
                };
                match result {
                    Ok(()) => {
                        notify(ToastKind::Success, "Cập nhật tài khoản thành công");
                        on_saved.emit(());
                    }
                    Err(err) => notify_failure(
                        "accounts.update",
                        &err,
                        "Không thể lưu tài khoản kế toán. Vui lòng thử lại sau.",
                    ),
                }
                form.dispatch(FormAction::Finish);
            });
        })
    };
    let backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let classes = classes!("modal", props.account.is_some().then_some("modal-open"));

    html! {
        <div class={classes} role="dialog" aria-modal="true">
            <form class="modal-box" onsubmit={on_submit(submit)} novalidate=true>
                <h3 class="mb-4 text-lg font-semibold">{"Chỉnh sửa tài khoản"}</h3>
                {account_fields(&form, true)}
                <FormActions submitting={form.submitting} on_cancel={props.on_close.clone()} />
            </form>
            <button class="modal-backdrop" type="button" onclick={backdrop}></button>
        </div>
    }
}

#[function_component(AccountListPage)]
pub(crate) fn account_list_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let navigator = use_navigator();
    let query = use_state(AccountQuery::default);
    let editing = use_state(|| None::<Account>);
    let (accounts, reload) = use_collection(
        String::new(),
        fetch_accounts,
        "accounts.list",
        "Không thể tải danh sách tài khoản. Vui lòng thử lại sau.",
    );
    let deletion = use_delete_flow(
        remove_account,
        "Xóa tài khoản thành công",
        "Không thể xóa tài khoản. Vui lòng thử lại sau.",
        reload.clone(),
    );

    let on_search = {
        let query = query.clone();
        Callback::from(move |keyword: String| {
            query.set(AccountQuery {
                keyword,
                ..(*query).clone()
            });
        })
    };
    let on_level = {
        let query = query.clone();
        Callback::from(move |raw: String| {
            query.set(AccountQuery {
                level: raw.parse().ok(),
                ..(*query).clone()
            });
        })
    };
    let on_sort = {
        let query = query.clone();
        Callback::from(move |raw: String| {
            query.set(AccountQuery {
                sort: AccountSort::from_key(&raw),
                ..(*query).clone()
            });
        })
    };
    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |account: Account| editing.set(Some(account)))
    };
    let on_delete = {
        let request = deletion.request.clone();
        Callback::from(move |account: Account| request.emit(account.matk))
    };
    let on_close = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(None))
    };
    let on_saved = {
        let editing = editing.clone();
        Callback::from(move |()| {
            editing.set(None);
            reload.emit(());
        })
    };
    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| go(navigator.as_ref(), Route::AccountCreate))
    };

    let body = if accounts.loading && accounts.data.is_none() {
        html! { <ProgressLine label={bundle.text("common.loading", "Đang tải dữ liệu...")} /> }
    } else if let Some(message) = accounts.error.clone() {
        html! { <div class="alert alert-error" role="alert">{message}</div> }
    } else if accounts.data.as_ref().is_none_or(Vec::is_empty) {
        html! {
            <EmptyState
                title={bundle.text("accounts.empty", "Chưa có tài khoản nào")}
                icon={html! { <IconDollar size="10" /> }}
            />
        }
    } else {
        let rows = query.apply(accounts.data.as_deref().unwrap_or_default());
        html! { <AccountTable accounts={rows} on_edit={on_edit} on_delete={on_delete} /> }
    };
    let sort_options = AccountSort::ALL
        .into_iter()
        .map(|sort| (AttrValue::from(sort.key()), AttrValue::from(sort.label())))
        .collect::<Vec<_>>();

    html! {
        <>
            <PageHeader title={bundle.text("nav.accounts", "Tài khoản kế toán")}>
                <button class="btn btn-primary btn-sm" type="button" onclick={on_create}>
                    <IconPlus size="4" />
                    {bundle.text("accounts.create", "Thêm tài khoản")}
                </button>
            </PageHeader>
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <div class="flex flex-wrap items-end gap-3">
                        <SearchInput
                            placeholder={bundle.text("accounts.search", "Tìm theo mã hoặc tên tài khoản...")}
                            on_search={on_search}
                            class="w-full max-w-sm"
                        />
                        <SelectField label="Cấp" class="w-40"
                            value={query.level.map(|level| level.to_string()).unwrap_or_default()}
                            options={level_options()} placeholder="Tất cả"
                            on_change={on_level} />
                        <SelectField label="Sắp xếp" class="w-56"
                            value={query.sort.key()} options={sort_options}
                            on_change={on_sort} />
                    </div>
                    {body}
                </div>
            </div>
            <AccountEditDialog account={(*editing).clone()} on_saved={on_saved} on_close={on_close} />
            <ConfirmDialog
                open={deletion.target.is_some()}
                title="Xác nhận xóa"
                message={format!(
                    "Bạn có chắc chắn muốn xóa tài khoản {}?",
                    deletion.target.clone().unwrap_or_default()
                )}
                busy={deletion.busy}
                on_confirm={deletion.confirm.clone()}
                on_cancel={deletion.cancel.clone()}
            />
        </>
    }
}

#[function_component(AccountCreatePage)]
pub(crate) fn account_create_page() -> Html {
    let navigator = use_navigator();
    let api = use_context::<ApiCtx>();
    let form = use_reducer(|| FormState::new(AccountForm::default()));

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
                let result = match values.to_record() {
                    Some(record) => api.client.create_account(&record).await,
                    None => Err(ApiError::Transport("invalid account level".into())),
                };
                match result {
                    Ok(()) => {
                        notify(ToastKind::Success, "Thêm tài khoản thành công");
                        go(navigator.as_ref(), Route::Accounts);
                    }
                    Err(err) => notify_failure(
                        "accounts.create",
                        &err,
                        "Không thể lưu tài khoản kế toán. Vui lòng thử lại sau.",
                    ),
                }
                form.dispatch(FormAction::Finish);
            });
        })
    };

    html! {
        <div class="mx-auto max-w-xl">
            <PageHeader title="Thêm tài khoản kế toán" />
            <form class="card bg-base-100 shadow" onsubmit={on_submit(submit)} novalidate=true>
                <div class="card-body">
                    {account_fields(&form, false)}
                    <FormActions submitting={form.submitting} on_cancel={go_to(navigator, Route::Accounts)} />
                </div>
            </form>
        </div>
    }
}
