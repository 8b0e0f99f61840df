//! Page plumbing shared by the entity slices.
//!
//! # Design
//! - List and record hooks tag each fetch with a generation and drop superseded results.
//! - Failures are logged with the operation name before they reach the user.
//! - Form helpers go through the reducer so async completions see the latest state.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::core::api_error::ApiError;
use crate::core::edit::EditPhase;
use crate::core::form::{FieldErrors, FormAction, FormState};
use crate::core::request::{GenerationCounter, Resource, ResourceAction};
use crate::core::store::app_dispatch;
use crate::models::ToastKind;
use crate::services::api::ApiClient;
use gloo::console;
use salesdesk_api_models::{Account, Customer, Product};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Boxed request future returned by fetch functions.
pub(crate) type Request<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;

pub(crate) const NO_CLIENT: &str = "Chưa cấu hình kết nối máy chủ";

/// Queue a toast on the global store.
pub(crate) fn notify(kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    app_dispatch().reduce_mut(move |store| store.notify(kind, message));
}

/// Log a failed call and return the text to show for it.
pub(crate) fn failure_text(operation: &'static str, err: &ApiError, fallback: &str) -> String {
    console::warn!(operation, err.to_string());
    err.user_message(fallback)
}

/// Log a failed mutation and toast it.
pub(crate) fn notify_failure(operation: &'static str, err: &ApiError, fallback: &str) {
    notify(ToastKind::Error, failure_text(operation, err, fallback));
}

/// Push `route` when a navigator is available.
pub(crate) fn go(navigator: Option<&Navigator>, route: Route) {
    if let Some(navigator) = navigator {
        navigator.push(&route);
    }
}

/// Callback that navigates to a fixed route.
pub(crate) fn go_to(navigator: Option<Navigator>, route: Route) -> Callback<()> {
    Callback::from(move |()| go(navigator.as_ref(), route.clone()))
}

/// Fetch a collection on mount, when `query` changes and when the returned callback fires.
#[hook]
pub(crate) fn use_collection<T>(
    query: String,
    fetch: fn(Rc<ApiClient>, String) -> Request<Vec<T>>,
    operation: &'static str,
    fallback: &'static str,
) -> (UseReducerHandle<Resource<Vec<T>>>, Callback<()>)
where
    T: Clone + 'static,
{
    let state = use_reducer(Resource::default);
    let counter = use_mut_ref(GenerationCounter::default);
    let reloads = use_state(|| 0_u32);
    let api = use_context::<ApiCtx>();
    {
        let state = state.clone();
        use_effect_with((query, *reloads), move |(query, _)| {
            let query = query.clone();
            let generation = counter.borrow_mut().next();
            state.dispatch(ResourceAction::Begin(generation));
            match api {
                Some(api) => spawn_local(async move {
                    let result = fetch(Rc::clone(&api.client), query)
                        .await
                        .map_err(|err| failure_text(operation, &err, fallback));
                    state.dispatch(ResourceAction::Resolve(generation, result));
                }),
                None => state.dispatch(ResourceAction::Resolve(generation, Err(NO_CLIENT.into()))),
            }
        });
    }
    let reload = {
        let reloads = reloads.clone();
        Callback::from(move |()| reloads.set(reloads.wrapping_add(1)))
    };
    (state, reload)
}

/// Rows for a select input, loaded once.
#[hook]
pub(crate) fn use_options<T>(
    fetch: fn(Rc<ApiClient>, String) -> Request<Vec<T>>,
    operation: &'static str,
) -> Vec<T>
where
    T: Clone + 'static,
{
    let (rows, _) = use_collection(
        String::new(),
        fetch,
        operation,
        "Không thể tải dữ liệu lựa chọn",
    );
    rows.data.clone().unwrap_or_default()
}

/// `(value, label)` pairs for a select input.
pub(crate) fn choices<T>(rows: &[T], pair: fn(&T) -> (String, String)) -> Vec<(AttrValue, AttrValue)> {
    rows.iter()
        .map(|row| {
            let (value, label) = pair(row);
            (AttrValue::from(value), AttrValue::from(label))
        })
        .collect()
}

/// Every product, for pickers.
pub(crate) fn all_products(client: Rc<ApiClient>, _: String) -> Request<Vec<Product>> {
    Box::pin(async move { client.products(None).await })
}

/// Every customer, for pickers.
pub(crate) fn all_customers(client: Rc<ApiClient>, _: String) -> Request<Vec<Customer>> {
    Box::pin(async move { client.customers().await })
}

/// Every ledger account, for pickers and the chart of accounts.
pub(crate) fn all_accounts(client: Rc<ApiClient>, _: String) -> Request<Vec<Account>> {
    Box::pin(async move { client.accounts().await })
}

pub(crate) fn product_choice(product: &Product) -> (String, String) {
    (
        product.maspdv.clone(),
        format!("{} - {}", product.maspdv, product.tenspdv),
    )
}

pub(crate) fn customer_choice(customer: &Customer) -> (String, String) {
    (
        customer.makh.clone(),
        format!("{} - {}", customer.makh, customer.tenkh),
    )
}

pub(crate) fn account_choice(account: &Account) -> (String, String) {
    (
        account.matk.clone(),
        format!("{} - {}", account.matk, account.tentk),
    )
}

/// Load one record by key and track the page phase.
#[hook]
pub(crate) fn use_record<T>(
    key: String,
    fetch: fn(Rc<ApiClient>, String) -> Request<T>,
    operation: &'static str,
    fallback: &'static str,
) -> UseStateHandle<EditPhase<T>>
where
    T: Clone + PartialEq + 'static,
{
    let phase = use_state(|| EditPhase::Loading);
    let counter = use_mut_ref(GenerationCounter::default);
    let last_key = use_mut_ref(|| None::<String>);
    let api = use_context::<ApiCtx>();
    {
        let phase = phase.clone();
        use_effect_with(key, move |key| {
            let changed = last_key.borrow().as_deref() != Some(key.as_str());
            *last_key.borrow_mut() = Some(key.clone());
            let mut next = (*phase).clone();
            if !next.rekey(changed) {
                return;
            }
            if *phase != next {
                phase.set(next);
            }
            let generation = counter.borrow_mut().next();
            let key = key.clone();
            match api {
                Some(api) => spawn_local(async move {
                    let result = fetch(Rc::clone(&api.client), key).await;
                    if let Err(err) = &result {
                        failure_text(operation, err, fallback);
                    }
                    if counter.borrow().current() == generation {
                        phase.set(EditPhase::from_fetch(result, fallback));
                    }
                }),
                None => phase.set(EditPhase::Failed(NO_CLIENT.into())),
            }
        });
    }
    phase
}

/// Reset the form to the record once it has loaded.
#[hook]
pub(crate) fn use_prefill<R, F>(
    phase: EditPhase<R>,
    form: UseReducerHandle<FormState<F>>,
    from_record: fn(&R) -> F,
) where
    R: Clone + PartialEq + 'static,
    F: Clone + 'static,
{
    use_effect_with(phase, move |phase| {
        if let Some(record) = phase.record() {
            form.dispatch(FormAction::Load(from_record(record)));
        }
    });
}

/// Callback that writes an input's text into one form field.
pub(crate) fn bind<T: Clone + 'static>(
    form: &UseReducerHandle<FormState<T>>,
    field: &'static str,
    setter: fn(&mut T, String),
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        form.dispatch(FormAction::Set(
            field,
            Box::new(move |values: &mut T| setter(values, value)),
        ));
    })
}

/// Validate the current values; returns them when the mutation should be issued.
pub(crate) fn begin_submit<T: Clone + 'static>(
    form: &UseReducerHandle<FormState<T>>,
    validate: fn(&T) -> FieldErrors,
) -> Option<T> {
    let mut next = (**form).clone();
    let go = next.begin_submit(validate);
    let values = next.values.clone();
    form.dispatch(FormAction::Validated {
        errors: next.errors,
        submitting: next.submitting,
    });
    go.then_some(values)
}

/// State of a confirm-then-delete flow on a list page.
#[derive(Clone)]
pub(crate) struct DeleteFlow<K> {
    /// Key awaiting confirmation.
    pub target: Option<K>,
    /// The delete call is in flight.
    pub busy: bool,
    /// Ask for confirmation of a key.
    pub request: Callback<K>,
    /// Confirmed by the user.
    pub confirm: Callback<()>,
    /// Dismissed by the user.
    pub cancel: Callback<()>,
}

/// Confirm dialog state plus the delete call; `on_done` fires after a successful delete.
#[hook]
pub(crate) fn use_delete_flow<K>(
    delete: fn(Rc<ApiClient>, K) -> Request<()>,
    success: &'static str,
    fallback: &'static str,
    on_done: Callback<()>,
) -> DeleteFlow<K>
where
    K: Clone + 'static,
{
    let target = use_state(|| None::<K>);
    let busy = use_state(|| false);
    let api = use_context::<ApiCtx>();

    let request = {
        let target = target.clone();
        Callback::from(move |key: K| target.set(Some(key)))
    };
    let cancel = {
        let target = target.clone();
        let busy = busy.clone();
        Callback::from(move |()| {
            if !*busy {
                target.set(None);
            }
        })
    };
    let confirm = {
        let target = target.clone();
        let busy = busy.clone();
        Callback::from(move |()| {
            let (Some(key), Some(api)) = ((*target).clone(), api.clone()) else {
                return;
            };
            if *busy {
                return;
            }
            busy.set(true);
            let target = target.clone();
            let busy = busy.clone();
            let on_done = on_done.clone();
            spawn_local(async move {
                match delete(Rc::clone(&api.client), key).await {
                    Ok(()) => {
                        notify(ToastKind::Success, success);
                        on_done.emit(());
                    }
                    Err(err) => notify_failure("delete", &err, fallback),
                }
                busy.set(false);
                target.set(None);
            });
        })
    };

    DeleteFlow {
        target: (*target).clone(),
        busy: *busy,
        request,
        confirm,
        cancel,
    }
}
