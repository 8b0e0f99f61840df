use super::chart::RevenueChart;
use super::hooks::{use_dashboard_data, use_revenue_data};
use super::state::{ChartKind, DashboardTab, Period};
use super::summary::SalesSummary;
use super::top_lists::{TopCustomers, TopProducts};
use crate::app::Route;
use crate::components::atoms::PageHeader;
use crate::core::format::format_currency;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use salesdesk_api_models::{RevenuePoint, TopCustomer, TopProduct};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let period = use_state(Period::default);
    let chart_kind = use_state(ChartKind::default);
    let tab = use_state(DashboardTab::default);
    let navigator = use_navigator();
    let summary = use_dashboard_data(*period);
    let revenue = use_revenue_data(*period);

    let on_kind = {
        let chart_kind = chart_kind.clone();
        Callback::from(move |kind| chart_kind.set(kind))
    };
    let on_view_product = {
        let navigator = navigator.clone();
        Callback::from(move |product: TopProduct| {
            if let (Some(navigator), Some(code)) = (navigator.as_ref(), product.maspdv) {
                navigator.push(&Route::ProductDetail { id: code });
            }
        })
    };
    let on_view_customer = Callback::from(move |customer: TopCustomer| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::CustomerEdit { id: customer.makh });
        }
    });

    let view = summary.data.clone();
    let stats = view.as_ref().map(|view| view.stats.clone());
    let products = view
        .as_ref()
        .map(|view| view.top_products.clone())
        .unwrap_or_default();
    let customers = view
        .as_ref()
        .map(|view| view.top_customers.clone())
        .unwrap_or_default();
    let series = revenue.data.clone().unwrap_or_default();

    let tab_body = match *tab {
        DashboardTab::Products => html! {
            <TopProducts products={products} loading={summary.loading} on_view={on_view_product} />
        },
        DashboardTab::Customers => html! {
            <TopCustomers customers={customers} loading={summary.loading} on_view={on_view_customer} />
        },
        DashboardTab::Summary => sales_table(&series, &bundle),
    };

    html! {
        <div class="flex flex-col gap-6">
            <PageHeader
                title={bundle.text("nav.dashboard", "Dashboard")}
                subtitle={bundle.text("dashboard.subtitle", "Tổng quan hoạt động kinh doanh")}
            >
                <div class="join">
                    {for Period::ALL.into_iter().map(|option| {
                        let period = period.clone();
                        let active = *period == option;
                        html! {
                            <button
                                type="button"
                                class={classes!("btn", "btn-sm", "join-item", active.then_some("btn-primary"))}
                                onclick={Callback::from(move |_| period.set(option))}
                            >
                                {option.label()}
                            </button>
                        }
                    })}
                </div>
            </PageHeader>
            {summary.error.clone().map(|message| html! {
                <div class="alert alert-error" role="alert">{message}</div>
            }).unwrap_or_default()}
            <SalesSummary period={*period} loading={summary.loading} stats={stats} />
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{bundle.text("dashboard.revenue", "Doanh thu")}</h2>
                    <p class="text-base-content/60 text-sm">
                        {format!("Doanh thu theo {}", period.noun())}
                    </p>
                    {revenue.error.clone().map(|message| html! {
                        <div class="alert alert-error alert-soft" role="alert">{message}</div>
                    }).unwrap_or_default()}
                    <RevenueChart series={series.clone()} loading={revenue.loading} kind={*chart_kind} on_kind={on_kind} />
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div role="tablist" class="tabs tabs-border">
                        {for DashboardTab::ALL.into_iter().map(|option| {
                            let tab = tab.clone();
                            let active = *tab == option;
                            html! {
                                <button
                                    type="button"
                                    role="tab"
                                    class={classes!("tab", active.then_some("tab-active"))}
                                    onclick={Callback::from(move |_| tab.set(option))}
                                >
                                    {option.label()}
                                </button>
                            }
                        })}
                    </div>
                    <div class="pt-4">{tab_body}</div>
                </div>
            </div>
        </div>
    }
}

fn sales_table(series: &[RevenuePoint], bundle: &TranslationBundle) -> Html {
    let total: f64 = series.iter().map(|point| point.revenue).sum();
    html! {
        <div class="overflow-x-auto">
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{bundle.text("dashboard.col_bucket", "Thời gian")}</th>
                        <th class="text-right">{bundle.text("dashboard.col_revenue", "Doanh thu")}</th>
                    </tr>
                </thead>
                <tbody>
                    {for series.iter().map(|point| html! {
                        <tr>
                            <td>{point.time.clone()}</td>
                            <td class="text-right">{format_currency(point.revenue)}</td>
                        </tr>
                    })}
                </tbody>
                <tfoot>
                    <tr>
                        <th>{bundle.text("dashboard.total", "Tổng cộng")}</th>
                        <th class="text-right">{format_currency(total)}</th>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}
