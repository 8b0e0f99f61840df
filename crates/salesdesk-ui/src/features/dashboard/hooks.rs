//! Dashboard data hooks.
//!
//! # Design
//! - Both hooks register the same reducer, ref and effect on every render and never branch
//!   before doing so; callers branch on the returned fields instead.
//! - Each period change issues a new generation; the reducer drops resolutions from older ones.
//! - Placeholder mode resolves after a fixed delay; live mode reads the aggregate endpoints.

use super::logic::{mock_view_model, revenue_series};
use super::state::{DashboardView, Period};
use crate::app::api::ApiCtx;
use crate::app::preferences::{dashboard_live, now_millis};
use crate::core::api_error::ApiError;
use crate::core::request::{GenerationCounter, Resource, ResourceAction};
use crate::services::api::ApiClient;
use gloo::console;
use gloo::timers::callback::Timeout;
use salesdesk_api_models::{RevenuePoint, TopQuery};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const SUMMARY_DELAY_MS: u32 = 1_000;
const REVENUE_DELAY_MS: u32 = 800;
const LOAD_FAILED: &str = "Không thể tải dữ liệu tổng quan";

/// Summary figures, revenue series and top lists for `period`.
#[hook]
pub(crate) fn use_dashboard_data(period: Period) -> UseReducerHandle<Resource<DashboardView>> {
    let state = use_reducer(Resource::default);
    let counter = use_mut_ref(GenerationCounter::default);
    let api = use_context::<ApiCtx>();
    {
        let state = state.clone();
        use_effect_with(period, move |period| {
            let period = *period;
            let generation = counter.borrow_mut().next();
            state.dispatch(ResourceAction::Begin(generation));
            let mut pending = None;
            match api.filter(|_| dashboard_live()) {
                Some(api) => spawn_local(async move {
                    let result = load_view(&api.client, period)
                        .await
                        .map_err(|err| report("dashboard summary", &err));
                    state.dispatch(ResourceAction::Resolve(generation, result));
                }),
                None => {
                    pending = Some(Timeout::new(SUMMARY_DELAY_MS, move || {
                        let view = mock_view_model(period, now_millis());
                        state.dispatch(ResourceAction::Resolve(generation, Ok(view)));
                    }));
                }
            }
            move || drop(pending)
        });
    }
    state
}

/// Revenue series for the chart, refreshed whenever `period` changes.
#[hook]
pub(crate) fn use_revenue_data(period: Period) -> UseReducerHandle<Resource<Vec<RevenuePoint>>> {
    let state = use_reducer(Resource::default);
    let counter = use_mut_ref(GenerationCounter::default);
    let api = use_context::<ApiCtx>();
    {
        let state = state.clone();
        use_effect_with(period, move |period| {
            let period = *period;
            let generation = counter.borrow_mut().next();
            state.dispatch(ResourceAction::Begin(generation));
            let mut pending = None;
            match api.filter(|_| dashboard_live()) {
                Some(api) => spawn_local(async move {
                    let result = api
                        .client
                        .revenue(&period.revenue_query())
                        .await
                        .map_err(|err| report("dashboard revenue", &err));
                    state.dispatch(ResourceAction::Resolve(generation, result));
                }),
                None => {
                    pending = Some(Timeout::new(REVENUE_DELAY_MS, move || {
                        let series = revenue_series(period, now_millis());
                        state.dispatch(ResourceAction::Resolve(generation, Ok(series)));
                    }));
                }
            }
            move || drop(pending)
        });
    }
    state
}

async fn load_view(client: &ApiClient, period: Period) -> Result<DashboardView, ApiError> {
    let top = TopQuery::default();
    let stats = client.dashboard_stats().await?;
    let revenue_series = client.revenue(&period.revenue_query()).await?;
    let top_products = client.top_products(&top).await?;
    let top_customers = client.top_customers(&top).await?;
    Ok(DashboardView {
        stats,
        revenue_series,
        top_products,
        top_customers,
    })
}

fn report(operation: &'static str, err: &ApiError) -> String {
    console::warn!(operation, err.to_string());
    err.user_message(LOAD_FAILED)
}
