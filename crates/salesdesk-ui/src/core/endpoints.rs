//! REST paths relative to the versioned API root.
//!
//! # Design
//! - Path segments taken from user data are percent-encoded.
//! - Discount schedules are keyed by product and effective date at midnight.

use chrono::NaiveDate;

/// API version segment appended to the configured origin.
pub const API_VERSION: &str = "v1";

/// Versioned API root for an origin such as `http://localhost:8000`.
#[must_use]
pub fn api_root(origin: &str) -> String {
    format!("{}/api/{API_VERSION}", origin.trim_end_matches('/'))
}

/// Append `pairs` as an encoded query string.
#[must_use]
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// `/{collection}/{key}`.
#[must_use]
pub fn item(collection: &str, key: &str) -> String {
    format!("/{collection}/{}", urlencoding::encode(key))
}

/// `/{collection}/product/{maspdv}` for per-product listings.
#[must_use]
pub fn by_product(collection: &str, maspdv: &str) -> String {
    format!("/{collection}/product/{}", urlencoding::encode(maspdv))
}

/// `/dinhmucck/{maspdv}/{YYYY-MM-DDT00:00:00}`.
#[must_use]
pub fn discount_schedule(maspdv: &str, date: NaiveDate) -> String {
    format!(
        "/{DISCOUNTS}/{}/{}",
        urlencoding::encode(maspdv),
        date.format("%Y-%m-%dT00:00:00")
    )
}

/// Products and services.
pub const PRODUCTS: &str = "spdv";
/// Customers.
pub const CUSTOMERS: &str = "khachhang";
/// Price lists.
pub const PRICE_LISTS: &str = "banggia";
/// Discount schedules.
pub const DISCOUNTS: &str = "dinhmucck";
/// Invoices.
pub const INVOICES: &str = "hoadon";
/// Discount vouchers.
pub const VOUCHERS: &str = "phieugiamgia";
/// Chart of accounts.
pub const ACCOUNTS: &str = "tkkt";
/// Login.
pub const LOGIN: &str = "/auth/login";
/// Current user profile.
pub const ME: &str = "/users/me";

/// Dashboard aggregate paths.
pub mod dashboard {
    /// Headline stats.
    pub const STATS: &str = "/dashboard/stats";
    /// Revenue series.
    pub const REVENUE: &str = "/dashboard/revenue";
    /// Top products.
    pub const TOP_PRODUCTS: &str = "/dashboard/top-products";
    /// Top customers.
    pub const TOP_CUSTOMERS: &str = "/dashboard/top-customers";

    /// Per-product figures.
    #[must_use]
    pub fn product_stats(code: &str) -> String {
        format!("/dashboard/product-stats/{}", urlencoding::encode(code))
    }

    /// Per-customer figures.
    #[must_use]
    pub fn customer_stats(code: &str) -> String {
        format!("/dashboard/customer-stats/{}", urlencoding::encode(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_root_strips_trailing_slash() {
        assert_eq!(api_root("http://localhost:8000/"), "http://localhost:8000/api/v1");
    }

    #[test]
    fn discount_keys_use_midnight_timestamp() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default();
        assert_eq!(
            discount_schedule("SP 01", date),
            "/dinhmucck/SP%2001/2024-03-01T00:00:00"
        );
    }

    #[test]
    fn queries_are_encoded() {
        let path = with_query("/khachhang/search", &[("keyword", "Công ty".to_string())]);
        assert_eq!(path, "/khachhang/search?keyword=C%C3%B4ng%20ty");
        assert_eq!(with_query("/spdv", &[]), "/spdv");
    }

    #[test]
    fn item_paths_encode_keys() {
        assert_eq!(item(PRODUCTS, "SP0001"), "/spdv/SP0001");
        assert_eq!(by_product(PRICE_LISTS, "SP/1"), "/banggia/product/SP%2F1");
        assert_eq!(dashboard::product_stats("SP0001"), "/dashboard/product-stats/SP0001");
    }
}
