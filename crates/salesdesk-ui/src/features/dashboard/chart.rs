use super::logic::{axis_ticks, bar_height, max_revenue};
use super::state::ChartKind;
use crate::components::atoms::ProgressLine;
use crate::core::format::{format_axis, format_currency};
use crate::core::theme::{CHART_BAR, PRIMARY};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use salesdesk_api_models::RevenuePoint;
use yew::prelude::*;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 280.0;
const LEFT: f64 = 64.0;
const BOTTOM: f64 = 28.0;
const TOP: f64 = 12.0;
const TICKS: u32 = 4;

#[derive(Properties, PartialEq)]
pub(crate) struct RevenueChartProps {
    pub series: Vec<RevenuePoint>,
    pub loading: bool,
    pub kind: ChartKind,
    pub on_kind: Callback<ChartKind>,
}

/// Revenue per bucket as an inline SVG.
#[function_component(RevenueChart)]
pub(crate) fn revenue_chart(props: &RevenueChartProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let pick = |kind: ChartKind| {
        let on_kind = props.on_kind.clone();
        Callback::from(move |_: MouseEvent| on_kind.emit(kind))
    };
    let toggle = html! {
        <div class="join">
            <button
                type="button"
                class={classes!("btn", "btn-xs", "join-item", (props.kind == ChartKind::Line).then_some("btn-active"))}
                onclick={pick(ChartKind::Line)}
            >
                {bundle.text("dashboard.chart_line", "Đường")}
            </button>
            <button
                type="button"
                class={classes!("btn", "btn-xs", "join-item", (props.kind == ChartKind::Bar).then_some("btn-active"))}
                onclick={pick(ChartKind::Bar)}
            >
                {bundle.text("dashboard.chart_bar", "Cột")}
            </button>
        </div>
    };

    let body = if props.loading && props.series.is_empty() {
        html! { <ProgressLine label={bundle.text("dashboard.loading", "Đang tải dữ liệu...")} /> }
    } else {
        plot(&props.series, props.kind)
    };

    html! {
        <div class={classes!("relative", props.loading.then_some("opacity-60"))}>
            <div class="mb-2 flex justify-end">{toggle}</div>
            {body}
        </div>
    }
}

fn plot(series: &[RevenuePoint], kind: ChartKind) -> Html {
    let revenues: Vec<f64> = series.iter().map(|point| point.revenue).collect();
    let ticks = axis_ticks(max_revenue(&revenues), TICKS);
    let top = ticks.last().copied().unwrap_or_default();
    let plot_height = HEIGHT - BOTTOM - TOP;
    let plot_width = WIDTH - LEFT;
    #[allow(clippy::cast_precision_loss)]
    let slot = plot_width / series.len().max(1) as f64;
    let y_of = |value: f64| TOP + plot_height - bar_height(value, top, plot_height);
    let x_of = |idx: usize| {
        #[allow(clippy::cast_precision_loss)]
        let idx = idx as f64;
        LEFT + slot * idx + slot / 2.0
    };
    let label_every = if series.len() > 12 { 3 } else { 1 };

    let grid = ticks.iter().map(|tick| {
        let y = y_of(*tick);
        html! {
            <g>
                <line x1={LEFT.to_string()} x2={WIDTH.to_string()} y1={y.to_string()} y2={y.to_string()}
                    stroke="currentColor" stroke-opacity="0.1" />
                <text x={(LEFT - 8.0).to_string()} y={(y + 4.0).to_string()} text-anchor="end"
                    font-size="11" fill="currentColor" fill-opacity="0.6">
                    {format_axis(*tick)}
                </text>
            </g>
        }
    });

    let labels = series.iter().enumerate().filter(|(idx, _)| idx % label_every == 0).map(|(idx, point)| html! {
        <text x={x_of(idx).to_string()} y={(HEIGHT - 8.0).to_string()} text-anchor="middle"
            font-size="11" fill="currentColor" fill-opacity="0.6">
            {point.time.clone()}
        </text>
    });

    let marks = match kind {
        ChartKind::Bar => {
            let bar = (slot * 0.6).max(2.0);
            html! {
                <g>
                    {for series.iter().enumerate().map(|(idx, point)| {
                        let y = y_of(point.revenue);
                        html! {
                            <rect x={(x_of(idx) - bar / 2.0).to_string()} y={y.to_string()}
                                width={bar.to_string()} height={(TOP + plot_height - y).to_string()}
                                rx="3" fill={CHART_BAR}>
                                <title>{format!("{}: {}", point.time, format_currency(point.revenue))}</title>
                            </rect>
                        }
                    })}
                </g>
            }
        }
        ChartKind::Line => {
            let points = series
                .iter()
                .enumerate()
                .map(|(idx, point)| format!("{},{}", x_of(idx), y_of(point.revenue)))
                .collect::<Vec<_>>()
                .join(" ");
            html! {
                <g>
                    <polyline points={points} fill="none" stroke={PRIMARY} stroke-width="2" />
                    {for series.iter().enumerate().map(|(idx, point)| html! {
                        <circle cx={x_of(idx).to_string()} cy={y_of(point.revenue).to_string()} r="3" fill={PRIMARY}>
                            <title>{format!("{}: {}", point.time, format_currency(point.revenue))}</title>
                        </circle>
                    })}
                </g>
            }
        }
    };

    html! {
        <svg class="h-72 w-full" viewBox={format!("0 0 {WIDTH} {HEIGHT}")} preserveAspectRatio="none" role="img">
            {for grid}
            {marks}
            {for labels}
        </svg>
    }
}
