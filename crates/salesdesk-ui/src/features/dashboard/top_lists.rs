//! Ranked product and customer lists.
//!
//! # Design
//! - Rows keep the order they arrive in; nothing here re-sorts.
//! - The view action exists only when the page supplies a callback.

use super::logic::{ListState, avatar_color, bar_width, initials, max_revenue};
use crate::components::atoms::icons::{IconEye, IconPackage, IconUsers};
use crate::components::atoms::{EmptyState, IconButton, ProgressLine};
use crate::core::format::{format_currency, format_number};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use salesdesk_api_models::{TopCustomer, TopProduct};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TopProductsProps {
    pub products: Vec<TopProduct>,
    pub loading: bool,
    #[prop_or_default]
    pub on_view: Option<Callback<TopProduct>>,
}

#[function_component(TopProducts)]
pub(crate) fn top_products(props: &TopProductsProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    match ListState::of(props.loading, props.products.len()) {
        ListState::Loading => {
            return html! {
                <ProgressLine label={bundle.text("dashboard.loading", "Đang tải dữ liệu...")} />
            };
        }
        ListState::Empty => {
            return html! {
                <EmptyState
                    title={bundle.text("dashboard.no_products", "Không có dữ liệu sản phẩm")}
                    icon={html! { <IconPackage size="10" /> }}
                />
            };
        }
        ListState::Populated => {}
    }

    let revenues: Vec<f64> = props.products.iter().map(|p| p.revenue).collect();
    let max = max_revenue(&revenues);
    let view_label = bundle.text("dashboard.view_detail", "Xem chi tiết");

    html! {
        <div class="flex flex-col gap-6">
            <div class="overflow-x-auto">
                <table class="table table-sm">
                    <thead>
                        <tr>
                            <th>{bundle.text("dashboard.col_product", "Sản phẩm")}</th>
                            <th class="text-right">{bundle.text("dashboard.col_revenue", "Doanh thu")}</th>
                            <th class="text-right">{bundle.text("dashboard.col_quantity", "SL")}</th>
                            {props.on_view.as_ref().map(|_| html! { <th /> }).unwrap_or_default()}
                        </tr>
                    </thead>
                    <tbody>
                        {for props.products.iter().map(|product| {
                            let action = props.on_view.as_ref().map(|on_view| {
                                let on_view = on_view.clone();
                                let product = product.clone();
                                html! {
                                    <td class="text-right">
                                        <IconButton label={view_label.clone()}
                                            onclick={Callback::from(move |_| on_view.emit(product.clone()))}>
                                            <IconEye size="4" />
                                        </IconButton>
                                    </td>
                                }
                            });
                            html! {
                                <tr>
                                    <td>
                                        <div class="font-medium">{product.name.clone()}</div>
                                        {product.maspdv.clone().map(|code| html! {
                                            <div class="text-base-content/60 text-xs">{code}</div>
                                        }).unwrap_or_default()}
                                    </td>
                                    <td class="text-right">{format_currency(product.revenue)}</td>
                                    <td class="text-right">{product.quantity.to_string()}</td>
                                    {action.unwrap_or_default()}
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
            <div>
                <h3 class="mb-3 font-medium">{bundle.text("dashboard.revenue_share", "Tỷ lệ doanh thu")}</h3>
                <div class="flex flex-col gap-3">
                    {for props.products.iter().map(|product| {
                        let width = bar_width(product.revenue, max);
                        html! {
                            <div>
                                <div class="mb-1 flex justify-between text-sm">
                                    <span>{product.name.clone()}</span>
                                    <span>{format!("{}%", format_number(width, 0))}</span>
                                </div>
                                <progress class="progress progress-primary w-full" value={width.to_string()} max="100" />
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TopCustomersProps {
    pub customers: Vec<TopCustomer>,
    pub loading: bool,
    #[prop_or_default]
    pub on_view: Option<Callback<TopCustomer>>,
}

#[function_component(TopCustomers)]
pub(crate) fn top_customers(props: &TopCustomersProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    match ListState::of(props.loading, props.customers.len()) {
        ListState::Loading => {
            return html! {
                <ProgressLine label={bundle.text("dashboard.loading", "Đang tải dữ liệu...")} />
            };
        }
        ListState::Empty => {
            return html! {
                <EmptyState
                    title={bundle.text("dashboard.no_customers", "Không có dữ liệu khách hàng")}
                    icon={html! { <IconUsers size="10" /> }}
                />
            };
        }
        ListState::Populated => {}
    }

    let revenues: Vec<f64> = props.customers.iter().map(|c| c.revenue).collect();
    let max = max_revenue(&revenues);
    let view_label = bundle.text("dashboard.view_detail", "Xem chi tiết");

    html! {
        <ul class="flex flex-col gap-4">
            {for props.customers.iter().map(|customer| {
                let width = bar_width(customer.revenue, max);
                let action = props.on_view.as_ref().map(|on_view| {
                    let on_view = on_view.clone();
                    let customer = customer.clone();
                    html! {
                        <IconButton label={view_label.clone()}
                            onclick={Callback::from(move |_| on_view.emit(customer.clone()))}>
                            <IconEye size="4" />
                        </IconButton>
                    }
                });
                html! {
                    <li class="flex items-center gap-3">
                        <div class="avatar avatar-placeholder">
                            <div class="w-10 rounded-full text-white"
                                style={format!("background-color: {}", avatar_color(&customer.name))}>
                                <span>{initials(&customer.name)}</span>
                            </div>
                        </div>
                        <div class="min-w-0 flex-1">
                            <div class="flex justify-between gap-2">
                                <span class="truncate font-medium">{customer.name.clone()}</span>
                                <span class="font-medium">{format_currency(customer.revenue)}</span>
                            </div>
                            <div class="text-base-content/60 mb-1 flex items-center justify-between text-xs">
                                <span>{customer.makh.clone()}</span>
                                <span class="badge badge-soft badge-sm">{format!("{} hóa đơn", customer.invoices)}</span>
                                <span>{format!("{}%", format_number(width, 0))}</span>
                            </div>
                            <progress class="progress progress-primary w-full" value={width.to_string()} max="100" />
                        </div>
                        {action.unwrap_or_default()}
                    </li>
                }
            })}
        </ul>
    }
}
