use super::logic::SummaryState;
use super::state::Period;
use crate::app::preferences::clock_label;
use crate::components::atoms::{EmptyState, ProgressLine};
use crate::components::atoms::icons::{IconArrowDown, IconArrowUp, IconDollar, IconReceipt};
use crate::core::format::{format_currency, format_number, growth_label};
use crate::core::theme::{GROWTH_DOWN, GROWTH_UP};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use salesdesk_api_models::DashboardStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SalesSummaryProps {
    pub period: Period,
    pub loading: bool,
    #[prop_or_default]
    pub stats: Option<DashboardStats>,
}

/// Headline cards for the selected period.
#[function_component(SalesSummary)]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn sales_summary(props: &SalesSummaryProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let noun = props.period.noun();

    let state = SummaryState::of(props.loading, props.stats.is_some());
    let body = match (state, &props.stats) {
        (SummaryState::Loading, _) => html! {
            <ProgressLine label={bundle.text("dashboard.loading", "Đang tải dữ liệu...")} />
        },
        (SummaryState::Unavailable, _) | (SummaryState::Ready, None) => html! {
            <EmptyState title={bundle.text("dashboard.no_stats", "Không có dữ liệu thống kê")} />
        },
        (SummaryState::Ready, Some(stats)) => html! {
            <>
                <div class="grid gap-4 md:grid-cols-3">
                    <SummaryCard
                        label={bundle.text("dashboard.total_revenue", "Tổng doanh thu")}
                        value={format_currency(stats.total_revenue)}
                        growth={stats.revenue_growth}
                        icon={html! { <IconDollar size="5" /> }}
                    />
                    <SummaryCard
                        label={bundle.text("dashboard.total_invoices", "Tổng đơn hàng")}
                        value={format_number(stats.total_invoices as f64, 0)}
                        growth={stats.invoice_growth}
                        icon={html! { <IconReceipt size="5" /> }}
                    />
                    <SummaryCard
                        label={bundle.text("dashboard.avg_order", "Giá trị đơn hàng trung bình")}
                        value={format_currency(stats.avg_order_value)}
                        icon={html! { <IconDollar size="5" /> }}
                    />
                </div>
                <p class="text-base-content/60 mt-4 text-right text-xs">
                    {format!(
                        "{} {}",
                        bundle.text("dashboard.updated_at", "Số liệu được cập nhật vào lúc"),
                        clock_label()
                    )}
                </p>
            </>
        },
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{format!("Tổng quan bán hàng {noun}")}</h2>
                <p class="text-base-content/60 text-sm">
                    {format!("Thống kê doanh thu và đơn hàng trong {noun}")}
                </p>
                {body}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SummaryCardProps {
    label: String,
    value: String,
    #[prop_or_default]
    growth: Option<f64>,
    icon: Html,
}

#[function_component(SummaryCard)]
fn summary_card(props: &SummaryCardProps) -> Html {
    html! {
        <div class="rounded-box border-base-300 border p-4">
            <div class="flex items-start justify-between gap-2 text-sm">
                <div>
                    <p class="text-base-content/80 font-medium">{props.label.clone()}</p>
                    <div class="mt-3 flex items-center gap-2">
                        <p class="inline text-2xl font-semibold">{props.value.clone()}</p>
                        {props.growth.map(growth_badge).unwrap_or_default()}
                    </div>
                </div>
                <div class="bg-base-200 rounded-box flex items-center p-2">{props.icon.clone()}</div>
            </div>
        </div>
    }
}

fn growth_badge(growth: f64) -> Html {
    let rising = growth >= 0.0;
    let color = if rising { GROWTH_UP } else { GROWTH_DOWN };
    html! {
        <div class="badge badge-ghost badge-sm gap-0.5 px-1 font-medium" style={format!("color: {color}")}>
            {if rising {
                html! { <IconArrowUp size="3.5" /> }
            } else {
                html! { <IconArrowDown size="3.5" /> }
            }}
            {growth_label(growth)}
        </div>
    }
}
