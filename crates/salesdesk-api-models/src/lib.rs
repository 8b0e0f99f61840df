#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Salesdesk accounting API.
//!
//! Field names follow the lower-case keys the console reads and writes. The
//! backend emits PascalCase keys for a few resources (`MaSPDV`, `MaTK`, ...),
//! which are accepted as aliases on input so the same types decode both.
//! Monetary values may arrive either as JSON numbers or as decimal strings.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod wire;

pub use wire::{parse_amount, parse_timestamp};

/// Error body returned by the backend on non-2xx responses.
///
/// `detail` is a plain string for handled errors and a list of field
/// violations for request validation failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorBody {
    /// Raw `detail` payload.
    #[serde(default)]
    pub detail: Value,
}

impl ErrorBody {
    /// Human-readable message carried by the body, if any.
    ///
    /// Returns the string detail, or the `msg` of the first validation item.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Array(items) => items.iter().find_map(|item| match item {
                Value::String(text) => Some(text.clone()),
                Value::Object(map) => map.get("msg").and_then(Value::as_str).map(str::to_string),
                _ => None,
            }),
            _ => None,
        }
    }
}

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Token issued by `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// Bearer token used on every subsequent request.
    pub access_token: String,
    /// Token scheme, normally `bearer`.
    #[serde(default)]
    pub token_type: String,
}

/// Profile returned by `/users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    /// Backend identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Login email.
    pub email: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Product or service record (`/spdv`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Stable product code.
    #[serde(alias = "MaSPDV")]
    pub maspdv: String,
    /// Product name.
    #[serde(alias = "TenSPDV")]
    pub tenspdv: String,
    /// Unit price.
    #[serde(alias = "DonGia", deserialize_with = "wire::amount")]
    pub dongia: f64,
    /// Unit of measure.
    #[serde(alias = "DVT")]
    pub dvt: String,
    /// Free-text description.
    #[serde(default, alias = "MoTa", skip_serializing_if = "Option::is_none")]
    pub mota: Option<String>,
}

/// Create/update body for products. The code is sent only on create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Product code, present when creating.
    pub maspdv: Option<String>,
    /// Product name.
    pub tenspdv: String,
    /// Unit price.
    pub dongia: f64,
    /// Unit of measure.
    pub dvt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Free-text description.
    pub mota: Option<String>,
}

/// Next free code suggested by `/{resource}/next-id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextCode {
    /// Suggested code.
    #[serde(alias = "next_code", alias = "id")]
    pub next_id: String,
}

/// Customer record (`/khachhang`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Customer {
    /// Customer code.
    #[serde(alias = "MaKH")]
    pub makh: String,
    /// Customer name.
    #[serde(alias = "TenKH")]
    pub tenkh: String,
    /// Postal address.
    #[serde(alias = "DiaChi")]
    pub diachi: String,
    /// Phone number, digits only.
    #[serde(default, alias = "SDT", skip_serializing_if = "Option::is_none")]
    pub sdt: Option<String>,
    /// Contact email.
    #[serde(default, alias = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Tax identification number.
    #[serde(default, alias = "MaSoThue", skip_serializing_if = "Option::is_none")]
    pub masothue: Option<String>,
    /// Customer segment.
    #[serde(default, alias = "PhanLoai", skip_serializing_if = "Option::is_none")]
    pub phanloai: Option<String>,
}

/// Price list entry (`/banggia`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceListEntry {
    /// Row identifier assigned by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Product code.
    #[serde(alias = "MaSPDV")]
    pub maspdv: String,
    /// Effective date.
    #[serde(alias = "NgayHL", deserialize_with = "wire::timestamp")]
    pub ngayhl: NaiveDateTime,
    /// Selling price from the effective date.
    #[serde(alias = "GiaBan", deserialize_with = "wire::amount")]
    pub giaban: f64,
}

/// Discount schedule (`/dinhmucck`), keyed by product and effective date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountSchedule {
    /// Product code.
    #[serde(alias = "MaSPDV")]
    pub maspdv: String,
    /// Effective date.
    #[serde(alias = "NgayHL", deserialize_with = "wire::timestamp")]
    pub ngayhl: NaiveDateTime,
    /// Order amount threshold.
    #[serde(alias = "MucTien", deserialize_with = "wire::amount")]
    pub muctien: f64,
    /// Discount rate in percent.
    #[serde(alias = "TyLeCK", deserialize_with = "wire::amount")]
    pub tyleck: f64,
}

/// Invoice header (`/hoadon`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    /// Document number.
    #[serde(alias = "SoCT")]
    pub soct: String,
    /// Issue date.
    #[serde(alias = "NgayLap", deserialize_with = "wire::timestamp")]
    pub ngaylap: NaiveDateTime,
    /// Customer code.
    #[serde(alias = "MaKH")]
    pub makh: String,
    /// Customer name snapshot.
    #[serde(default, alias = "TenKH")]
    pub tenkh: String,
    /// Payment method.
    #[serde(alias = "HinhThucTT")]
    pub hinhthuctt: String,
    /// Debit account.
    #[serde(alias = "TKNo")]
    pub tkno: String,
    /// Narrative.
    #[serde(default, alias = "DienGiai", skip_serializing_if = "Option::is_none")]
    pub diengiai: Option<String>,
    /// Revenue credit account.
    #[serde(alias = "TKCoDT")]
    pub tkcodt: String,
    /// Tax credit account.
    #[serde(alias = "TKCoThue")]
    pub tkcothue: String,
    /// Tax rate in percent.
    #[serde(alias = "ThueSuat", deserialize_with = "wire::amount")]
    pub thuesuat: f64,
    /// Tax amount.
    #[serde(alias = "TienThue", deserialize_with = "wire::amount")]
    pub tienthue: f64,
    /// Discount rate in percent.
    #[serde(default, alias = "TyLeCK", deserialize_with = "wire::amount")]
    pub tyleck: f64,
    /// Discount account.
    #[serde(default, alias = "TKChietKhau", skip_serializing_if = "Option::is_none")]
    pub tkchietkhau: Option<String>,
    /// Discount amount.
    #[serde(default, alias = "TienCK", deserialize_with = "wire::amount")]
    pub tienck: f64,
    /// Revenue before tax and discount.
    #[serde(alias = "TienDT", deserialize_with = "wire::amount")]
    pub tiendt: f64,
    /// Amount payable.
    #[serde(alias = "TienTT", deserialize_with = "wire::amount")]
    pub tientt: f64,
}

/// Invoice line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceLine {
    /// Product code.
    #[serde(alias = "MaSPDV")]
    pub maspdv: String,
    /// Quantity.
    #[serde(alias = "SoLuong", deserialize_with = "wire::amount")]
    pub soluong: f64,
    /// Unit of measure.
    #[serde(default, alias = "DVT")]
    pub dvt: String,
    /// Unit price.
    #[serde(alias = "DonGia", deserialize_with = "wire::amount")]
    pub dongia: f64,
}

/// Invoice detail response with its lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceWithLines {
    /// Header.
    pub hoa_don: Invoice,
    /// Line items.
    #[serde(default)]
    pub chi_tiet: Vec<InvoiceLine>,
}

/// Create body for invoices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoicePayload {
    /// Header fields.
    #[serde(flatten)]
    pub header: Invoice,
    /// Line items.
    pub chi_tiet: Vec<InvoiceLine>,
}

/// Discount voucher header (`/phieugiamgia`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Voucher {
    /// Voucher number.
    #[serde(alias = "SoPhieu")]
    pub sophieu: String,
    /// Issue date.
    #[serde(alias = "NgayLap", deserialize_with = "wire::timestamp")]
    pub ngaylap: NaiveDateTime,
    /// Customer code.
    #[serde(alias = "MaKH")]
    pub makh: String,
    /// Narrative.
    #[serde(default, alias = "DienGiai", skip_serializing_if = "Option::is_none")]
    pub diengiai: Option<String>,
    /// Deduction debit account.
    #[serde(alias = "TKNoGiamTru")]
    pub tknogiamtru: String,
    /// Payment credit account.
    #[serde(alias = "TKCoTT")]
    pub tkcott: String,
    /// Invoice the voucher applies to.
    #[serde(alias = "SoCT")]
    pub soct: String,
    /// Tax rate in percent.
    #[serde(alias = "ThueSuat", deserialize_with = "wire::amount")]
    pub thuesuat: f64,
    /// Tax amount.
    #[serde(alias = "TienThue", deserialize_with = "wire::amount")]
    pub tienthue: f64,
    /// Tax debit account.
    #[serde(alias = "TKNoThue")]
    pub tknothue: String,
    /// Revenue deducted.
    #[serde(alias = "TienDT", deserialize_with = "wire::amount")]
    pub tiendt: f64,
    /// Total refunded.
    #[serde(alias = "TienTT", deserialize_with = "wire::amount")]
    pub tientt: f64,
}

/// Voucher line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoucherLine {
    /// Product code.
    #[serde(alias = "MaSPDV")]
    pub maspdv: String,
    /// Quantity.
    #[serde(alias = "SoLuong", deserialize_with = "wire::amount")]
    pub soluong: f64,
    /// Unit price.
    #[serde(alias = "DonGia", deserialize_with = "wire::amount")]
    pub dongia: f64,
}

/// Voucher detail response with its lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoucherWithLines {
    /// Header fields.
    #[serde(flatten)]
    pub header: Voucher,
    /// Line items.
    #[serde(default)]
    pub chi_tiet: Vec<VoucherLine>,
}

/// Create body for vouchers; same shape as the detail response.
pub type VoucherPayload = VoucherWithLines;

/// Chart-of-accounts entry (`/tkkt`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Account code.
    #[serde(rename = "maTK", alias = "MaTK", alias = "matk")]
    pub matk: String,
    /// Account name.
    #[serde(rename = "tenTK", alias = "TenTK", alias = "tentk")]
    pub tentk: String,
    /// Hierarchy level, 1 through 5.
    #[serde(rename = "capTK", alias = "CapTK", alias = "captk")]
    pub captk: u8,
}

/// Collection response: either a bare array or a paged `{items, total}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListResponse<T> {
    /// Plain JSON array.
    Bare(Vec<T>),
    /// Paged envelope.
    Paged {
        /// Rows on this page.
        items: Vec<T>,
        /// Total rows across pages.
        #[serde(default)]
        total: Option<u64>,
    },
}

impl<T> ListResponse<T> {
    /// Rows regardless of envelope.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Paged { items, .. } => items,
        }
    }
}

/// Aggregate figures for `/dashboard/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Revenue over the current window.
    pub total_revenue: f64,
    /// Invoices issued over the current window.
    pub total_invoices: u64,
    /// Revenue divided by invoice count.
    pub avg_order_value: f64,
    /// Revenue change against the previous window, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_growth: Option<f64>,
    /// Invoice count change against the previous window, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_growth: Option<f64>,
}

/// One bucket of the revenue series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenuePoint {
    /// Bucket label.
    pub time: String,
    /// Revenue in the bucket.
    pub revenue: f64,
}

/// Best-selling product row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopProduct {
    /// Product code, when the backend provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maspdv: Option<String>,
    /// Product name.
    pub name: String,
    /// Revenue attributed to the product.
    pub revenue: f64,
    /// Units sold.
    pub quantity: u64,
}

/// Best customer row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopCustomer {
    /// Customer code.
    pub makh: String,
    /// Customer name.
    pub name: String,
    /// Revenue from the customer.
    pub revenue: f64,
    /// Number of invoices issued to the customer.
    pub invoices: u64,
}

/// Per-entity figures for `/dashboard/product-stats/{code}` and
/// `/dashboard/customer-stats/{code}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EntityStats {
    /// Revenue attributed to the entity.
    #[serde(default)]
    pub total_revenue: f64,
    /// Units sold, for products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_quantity: Option<f64>,
    /// Invoices touching the entity.
    #[serde(default)]
    pub invoice_count: u64,
    /// Revenue history.
    #[serde(default)]
    pub revenue_series: Vec<RevenuePoint>,
}

/// Query for `/dashboard/revenue`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RevenueQuery {
    /// Period token: `day`, `week`, `month` or `year`.
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Inclusive window start, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Inclusive window end, `YYYY-MM-DD`.
    pub end_date: Option<String>,
}

/// Query for the top-N dashboard endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopQuery {
    /// Maximum rows.
    pub limit: u32,
    /// Ranking key, `revenue` or `quantity`.
    pub sort_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Inclusive window start, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Inclusive window end, `YYYY-MM-DD`.
    pub end_date: Option<String>,
}

impl RevenueQuery {
    /// Query string pairs in the order the endpoint documents them.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("period", self.period.clone())];
        push_window(&mut pairs, self.start_date.as_ref(), self.end_date.as_ref());
        pairs
    }
}

impl TopQuery {
    /// Query string pairs in the order the endpoint documents them.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.clone()),
        ];
        push_window(&mut pairs, self.start_date.as_ref(), self.end_date.as_ref());
        pairs
    }
}

fn push_window(
    pairs: &mut Vec<(&'static str, String)>,
    start: Option<&String>,
    end: Option<&String>,
) {
    if let Some(start) = start {
        pairs.push(("startDate", start.clone()));
    }
    if let Some(end) = end {
        pairs.push(("endDate", end.clone()));
    }
}

impl Default for TopQuery {
    fn default() -> Self {
        Self {
            limit: 5,
            sort_by: "revenue".to_string(),
            start_date: None,
            end_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn list_response_accepts_both_envelopes() {
        let bare: ListResponse<Account> = serde_json::from_value(json!([
            {"MaTK": "111", "TenTK": "Tiền mặt", "CapTK": 1}
        ]))
        .expect("decode");
        assert_eq!(bare.into_items().len(), 1);
        let paged: ListResponse<Account> = serde_json::from_value(json!({
            "items": [{"maTK": "131", "tenTK": "Phải thu của khách hàng", "capTK": 1}],
            "total": 40
        }))
        .expect("decode");
        assert_eq!(paged.into_items()[0].matk, "131");
    }

    #[test]
    fn query_pairs_skip_absent_window() {
        let top = TopQuery::default();
        assert_eq!(
            top.pairs(),
            vec![("limit", "5".to_string()), ("sortBy", "revenue".to_string())]
        );
        let revenue = RevenueQuery {
            period: "year".to_string(),
            start_date: Some("2024-01-01".to_string()),
            end_date: None,
        };
        assert_eq!(
            revenue.pairs(),
            vec![
                ("period", "year".to_string()),
                ("startDate", "2024-01-01".to_string())
            ]
        );
    }

    #[test]
    fn error_body_prefers_string_detail() {
        let body: ErrorBody =
            serde_json::from_value(json!({"detail": "Không tìm thấy"})).expect("decode");
        assert_eq!(body.message().as_deref(), Some("Không tìm thấy"));
    }

    #[test]
    fn error_body_reads_first_validation_message() {
        let body: ErrorBody = serde_json::from_value(json!({
            "detail": [
                {"loc": ["body", "dongia"], "msg": "Đơn giá phải lớn hơn 0"},
                {"loc": ["body", "dvt"], "msg": "field required"}
            ]
        }))
        .expect("decode");
        assert_eq!(body.message().as_deref(), Some("Đơn giá phải lớn hơn 0"));
    }

    #[test]
    fn error_body_without_detail_has_no_message() {
        let body: ErrorBody = serde_json::from_value(json!({})).expect("decode");
        assert_eq!(body.message(), None);
        let blank: ErrorBody = serde_json::from_value(json!({"detail": "  "})).expect("decode");
        assert_eq!(blank.message(), None);
    }

    #[test]
    fn product_accepts_backend_casing_and_string_amounts() {
        let product: Product = serde_json::from_value(json!({
            "MaSPDV": "SP0001",
            "TenSPDV": "Phần mềm quản lý",
            "DonGia": "10000000.00",
            "DVT": "Bản"
        }))
        .expect("decode");
        assert_eq!(product.maspdv, "SP0001");
        assert!((product.dongia - 10_000_000.0).abs() < f64::EPSILON);
        assert_eq!(product.mota, None);
    }

    #[test]
    fn product_payload_omits_code_on_update() {
        let payload = ProductPayload {
            maspdv: None,
            tenspdv: "Tư vấn".to_string(),
            dongia: 500_000.0,
            dvt: "Giờ".to_string(),
            mota: None,
        };
        let value = serde_json::to_value(&payload).expect("encode");
        assert!(value.get("maspdv").is_none());
        assert!(value.get("mota").is_none());
        assert_eq!(value["tenspdv"], "Tư vấn");
    }

    #[test]
    fn account_serializes_with_camel_codes() {
        let account: Account = serde_json::from_value(json!({
            "MaTK": "511",
            "TenTK": "Doanh thu bán hàng",
            "CapTK": 1
        }))
        .expect("decode");
        let value = serde_json::to_value(&account).expect("encode");
        assert_eq!(value["maTK"], "511");
        assert_eq!(value["tenTK"], "Doanh thu bán hàng");
        assert_eq!(value["capTK"], 1);
    }

    #[test]
    fn discount_schedule_parses_date_only_and_datetime() {
        let with_time: DiscountSchedule = serde_json::from_value(json!({
            "maspdv": "SP0001",
            "ngayhl": "2024-01-05T00:00:00",
            "muctien": 5_000_000,
            "tyleck": "5.00"
        }))
        .expect("decode");
        let date_only: DiscountSchedule = serde_json::from_value(json!({
            "maspdv": "SP0001",
            "ngayhl": "2024-01-05",
            "muctien": 5_000_000,
            "tyleck": 5
        }))
        .expect("decode");
        assert_eq!(with_time.ngayhl, date_only.ngayhl);
        assert_eq!(
            with_time.ngayhl.date(),
            NaiveDate::from_ymd_opt(2024, 1, 5).expect("date")
        );
    }

    #[test]
    fn invoice_detail_decodes_nested_lines() {
        let detail: InvoiceWithLines = serde_json::from_value(json!({
            "hoa_don": {
                "soct": "HD0001",
                "ngaylap": "2024-03-01T08:30:00",
                "makh": "KH0001",
                "tenkh": "Công ty A",
                "hinhthuctt": "Tiền mặt",
                "tkno": "131",
                "tkcodt": "511",
                "tkcothue": "3331",
                "thuesuat": 10,
                "tienthue": 100_000,
                "tiendt": 1_000_000,
                "tientt": 1_100_000
            },
            "chi_tiet": [
                {"maspdv": "SP0001", "soluong": 2, "dvt": "Bản", "dongia": 500_000}
            ]
        }))
        .expect("decode");
        assert_eq!(detail.chi_tiet.len(), 1);
        assert!((detail.hoa_don.tienck).abs() < f64::EPSILON);
        assert_eq!(detail.hoa_don.tkchietkhau, None);
    }

    #[test]
    fn voucher_detail_flattens_header() {
        let detail: VoucherWithLines = serde_json::from_value(json!({
            "sophieu": "PGG0001",
            "ngaylap": "2024-03-02T00:00:00",
            "makh": "KH0001",
            "tknogiamtru": "521",
            "tkcott": "131",
            "soct": "HD0001",
            "thuesuat": 10,
            "tienthue": 10_000,
            "tknothue": "3331",
            "tiendt": 100_000,
            "tientt": 110_000,
            "chi_tiet": [{"maspdv": "SP0001", "soluong": 1, "dongia": 100_000}]
        }))
        .expect("decode");
        assert_eq!(detail.header.sophieu, "PGG0001");
        assert_eq!(detail.chi_tiet[0].maspdv, "SP0001");
    }

    #[test]
    fn dashboard_stats_growth_is_independently_optional() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "totalRevenue": 1_256_000_000.0,
            "totalInvoices": 156,
            "avgOrderValue": 8_051_282.0,
            "revenueGrowth": 12.5
        }))
        .expect("decode");
        assert_eq!(stats.revenue_growth, Some(12.5));
        assert_eq!(stats.invoice_growth, None);
        let value = serde_json::to_value(&stats).expect("encode");
        assert!(value.get("invoiceGrowth").is_none());
    }

    #[test]
    fn top_query_defaults_to_revenue_ranking() {
        let value = serde_json::to_value(TopQuery::default()).expect("encode");
        assert_eq!(value, json!({"limit": 5, "sortBy": "revenue"}));
    }
}
