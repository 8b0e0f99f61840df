//! HTTP client for the accounting REST API.
//!
//! # Design
//! - One client per app boot; the bearer token is swapped in place.
//! - Every request is aborted once the timeout fires.
//! - Non-2xx responses are normalized into [`ApiError`] before callers see them.
//! - A 401 from any call notifies the app so it can end the session.

use crate::core::api_error::ApiError;
use crate::core::endpoints::{self, dashboard as dash};
use chrono::NaiveDate;
use gloo::console;
use gloo::timers::callback::Timeout;
use gloo_net::http::{Method, RequestBuilder};
use salesdesk_api_models::{
    Account, CurrentUser, Customer, DashboardStats, DiscountSchedule, EntityStats, InvoicePayload,
    InvoiceWithLines, ListResponse, LoginRequest, NextCode, PriceListEntry, Product,
    ProductPayload, RevenuePoint, RevenueQuery, TokenResponse, TopCustomer, TopProduct, TopQuery,
    Invoice, Voucher, VoucherPayload, VoucherWithLines,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use web_sys::AbortController;
use yew::Callback;

/// Abort requests that have not completed after this long.
pub(crate) const REQUEST_TIMEOUT_MS: u32 = 10_000;

pub(crate) struct ApiClient {
    base_url: String,
    token: RefCell<Option<String>>,
    on_unauthorized: Callback<()>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>, on_unauthorized: Callback<()>) -> Self {
        Self {
            base_url: base_url.into(),
            token: RefCell::new(None),
            on_unauthorized,
        }
    }

    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let controller = AbortController::new()
            .map_err(|_| ApiError::transport("AbortController unavailable"))?;
        let signal = controller.signal();
        let deadline = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());

        let mut builder = RequestBuilder::new(&self.url(path))
            .method(method)
            .header("Accept", "application/json")
            .abort_signal(Some(&signal));
        let bearer = self.token.borrow().as_ref().map(|token| format!("Bearer {token}"));
        if let Some(bearer) = bearer {
            builder = builder.header("Authorization", &bearer);
        }
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body),
            None => builder.build(),
        }
        .map_err(ApiError::transport)?;

        let response = request.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::transport)?;
        drop(deadline);

        if (200..300).contains(&status) {
            return Ok(text);
        }
        let err = ApiError::from_response(status, &text);
        if err.is_unauthorized() {
            self.on_unauthorized.emit(());
        }
        console::warn!("api request failed", path.to_string(), err.to_string());
        Err(err)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(Method::GET, path, None).await?;
        decode(&text)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        self.get_json::<ListResponse<T>>(path)
            .await
            .map(ListResponse::into_items)
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self.execute(method, path, Some(encode(body)?)).await?;
        decode(&text)
    }

    async fn send_unit<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute(method, path, Some(encode(body)?)).await.map(drop)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, None).await.map(drop)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(ApiError::transport)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(ApiError::transport)
}

fn collection(name: &str) -> String {
    format!("/{name}")
}

fn search_path(name: &str, keyword: &str) -> String {
    endpoints::with_query(
        &format!("/{name}/search"),
        &[("keyword", keyword.trim().to_string())],
    )
}

impl ApiClient {
    pub(crate) async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send_json(Method::POST, endpoints::LOGIN, &body).await
    }

    pub(crate) async fn me(&self) -> Result<CurrentUser, ApiError> {
        self.get_json(endpoints::ME).await
    }
}

impl ApiClient {
    pub(crate) async fn products(&self, keyword: Option<&str>) -> Result<Vec<Product>, ApiError> {
        match keyword.filter(|value| !value.trim().is_empty()) {
            Some(keyword) => self.get_list(&search_path(endpoints::PRODUCTS, keyword)).await,
            None => self.get_list(&collection(endpoints::PRODUCTS)).await,
        }
    }

    pub(crate) async fn product(&self, code: &str) -> Result<Product, ApiError> {
        self.get_json(&endpoints::item(endpoints::PRODUCTS, code)).await
    }

    pub(crate) async fn next_product_code(&self) -> Result<String, ApiError> {
        self.get_json::<NextCode>(&format!("/{}/next-id", endpoints::PRODUCTS))
            .await
            .map(|next| next.next_id)
    }

    pub(crate) async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError> {
        self.send_unit(Method::POST, &collection(endpoints::PRODUCTS), payload)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        code: &str,
        payload: &ProductPayload,
    ) -> Result<(), ApiError> {
        self.send_unit(Method::PUT, &endpoints::item(endpoints::PRODUCTS, code), payload)
            .await
    }

    pub(crate) async fn delete_product(&self, code: &str) -> Result<(), ApiError> {
        self.delete(&endpoints::item(endpoints::PRODUCTS, code)).await
    }
}

impl ApiClient {
    pub(crate) async fn customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.get_list(&collection(endpoints::CUSTOMERS)).await
    }

    pub(crate) async fn search_customers(&self, keyword: &str) -> Result<Vec<Customer>, ApiError> {
        self.get_list(&search_path(endpoints::CUSTOMERS, keyword)).await
    }

    pub(crate) async fn customer(&self, code: &str) -> Result<Customer, ApiError> {
        self.get_json(&endpoints::item(endpoints::CUSTOMERS, code)).await
    }

    pub(crate) async fn create_customer(&self, customer: &Customer) -> Result<(), ApiError> {
        self.send_unit(Method::POST, &collection(endpoints::CUSTOMERS), customer)
            .await
    }

    pub(crate) async fn update_customer(
        &self,
        code: &str,
        customer: &Customer,
    ) -> Result<(), ApiError> {
        self.send_unit(Method::PUT, &endpoints::item(endpoints::CUSTOMERS, code), customer)
            .await
    }

    pub(crate) async fn delete_customer(&self, code: &str) -> Result<(), ApiError> {
        self.delete(&endpoints::item(endpoints::CUSTOMERS, code)).await
    }
}

impl ApiClient {
    pub(crate) async fn price_lists(&self) -> Result<Vec<PriceListEntry>, ApiError> {
        self.get_list(&collection(endpoints::PRICE_LISTS)).await
    }

    pub(crate) async fn price_lists_for_product(
        &self,
        maspdv: &str,
    ) -> Result<Vec<PriceListEntry>, ApiError> {
        self.get_list(&endpoints::by_product(endpoints::PRICE_LISTS, maspdv))
            .await
    }

    pub(crate) async fn price_list(&self, id: i64) -> Result<PriceListEntry, ApiError> {
        self.get_json(&endpoints::item(endpoints::PRICE_LISTS, &id.to_string()))
            .await
    }

    pub(crate) async fn create_price_list(&self, entry: &PriceListEntry) -> Result<(), ApiError> {
        self.send_unit(Method::POST, &collection(endpoints::PRICE_LISTS), entry)
            .await
    }

    pub(crate) async fn update_price_list(
        &self,
        id: i64,
        entry: &PriceListEntry,
    ) -> Result<(), ApiError> {
        let path = endpoints::item(endpoints::PRICE_LISTS, &id.to_string());
        self.send_unit(Method::PUT, &path, entry).await
    }

    pub(crate) async fn delete_price_list(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&endpoints::item(endpoints::PRICE_LISTS, &id.to_string()))
            .await
    }
}

impl ApiClient {
    pub(crate) async fn discounts(&self) -> Result<Vec<DiscountSchedule>, ApiError> {
        self.get_list(&collection(endpoints::DISCOUNTS)).await
    }

    pub(crate) async fn discounts_for_product(
        &self,
        maspdv: &str,
    ) -> Result<Vec<DiscountSchedule>, ApiError> {
        self.get_list(&endpoints::by_product(endpoints::DISCOUNTS, maspdv))
            .await
    }

    pub(crate) async fn discount(
        &self,
        maspdv: &str,
        date: NaiveDate,
    ) -> Result<DiscountSchedule, ApiError> {
        self.get_json(&endpoints::discount_schedule(maspdv, date)).await
    }

    pub(crate) async fn create_discount(&self, schedule: &DiscountSchedule) -> Result<(), ApiError> {
        self.send_unit(Method::POST, &collection(endpoints::DISCOUNTS), schedule)
            .await
    }

    pub(crate) async fn update_discount(
        &self,
        maspdv: &str,
        date: NaiveDate,
        schedule: &DiscountSchedule,
    ) -> Result<(), ApiError> {
        let path = endpoints::discount_schedule(maspdv, date);
        self.send_unit(Method::PUT, &path, schedule).await
    }

    pub(crate) async fn delete_discount(&self, maspdv: &str, date: NaiveDate) -> Result<(), ApiError> {
        self.delete(&endpoints::discount_schedule(maspdv, date)).await
    }
}

impl ApiClient {
    pub(crate) async fn invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.get_list(&collection(endpoints::INVOICES)).await
    }

    pub(crate) async fn invoice(&self, soct: &str) -> Result<InvoiceWithLines, ApiError> {
        self.get_json(&endpoints::item(endpoints::INVOICES, soct)).await
    }

    pub(crate) async fn create_invoice(&self, payload: &InvoicePayload) -> Result<(), ApiError> {
        self.send_unit(Method::POST, &collection(endpoints::INVOICES), payload)
            .await
    }

    pub(crate) async fn delete_invoice(&self, soct: &str) -> Result<(), ApiError> {
        self.delete(&endpoints::item(endpoints::INVOICES, soct)).await
    }
}

impl ApiClient {
    pub(crate) async fn vouchers(&self) -> Result<Vec<Voucher>, ApiError> {
        self.get_list(&collection(endpoints::VOUCHERS)).await
    }

    pub(crate) async fn voucher(&self, sophieu: &str) -> Result<VoucherWithLines, ApiError> {
        self.get_json(&endpoints::item(endpoints::VOUCHERS, sophieu)).await
    }

    pub(crate) async fn next_voucher_code(&self) -> Result<String, ApiError> {
        self.get_json::<NextCode>(&format!("/{}/next-id", endpoints::VOUCHERS))
            .await
            .map(|next| next.next_id)
    }

    pub(crate) async fn create_voucher(&self, payload: &VoucherPayload) -> Result<(), ApiError> {
        self.send_unit(Method::POST, &collection(endpoints::VOUCHERS), payload)
            .await
    }

    pub(crate) async fn delete_voucher(&self, sophieu: &str) -> Result<(), ApiError> {
        self.delete(&endpoints::item(endpoints::VOUCHERS, sophieu)).await
    }
}

impl ApiClient {
    pub(crate) async fn accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.get_list(&collection(endpoints::ACCOUNTS)).await
    }

    pub(crate) async fn create_account(&self, account: &Account) -> Result<(), ApiError> {
        self.send_unit(Method::POST, &collection(endpoints::ACCOUNTS), account)
            .await
    }

    pub(crate) async fn update_account(&self, matk: &str, account: &Account) -> Result<(), ApiError> {
        self.send_unit(Method::PUT, &endpoints::item(endpoints::ACCOUNTS, matk), account)
            .await
    }

    pub(crate) async fn delete_account(&self, matk: &str) -> Result<(), ApiError> {
        self.delete(&endpoints::item(endpoints::ACCOUNTS, matk)).await
    }
}

impl ApiClient {
    pub(crate) async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json(dash::STATS).await
    }

    pub(crate) async fn revenue(&self, query: &RevenueQuery) -> Result<Vec<RevenuePoint>, ApiError> {
        self.get_json(&endpoints::with_query(dash::REVENUE, &query.pairs()))
            .await
    }

    pub(crate) async fn top_products(&self, query: &TopQuery) -> Result<Vec<TopProduct>, ApiError> {
        self.get_json(&endpoints::with_query(dash::TOP_PRODUCTS, &query.pairs()))
            .await
    }

    pub(crate) async fn top_customers(
        &self,
        query: &TopQuery,
    ) -> Result<Vec<TopCustomer>, ApiError> {
        self.get_json(&endpoints::with_query(dash::TOP_CUSTOMERS, &query.pairs()))
            .await
    }

    pub(crate) async fn product_stats(&self, code: &str) -> Result<EntityStats, ApiError> {
        self.get_json(&dash::product_stats(code)).await
    }

    pub(crate) async fn customer_stats(&self, code: &str) -> Result<EntityStats, ApiError> {
        self.get_json(&dash::customer_stats(code)).await
    }
}
