//! Dashboard view-model types.
//!
//! # Design
//! - The view-model is the only dashboard structure synthesized locally.
//! - Growth percentages are independently optional; an absent value renders no badge.
//! - Period tokens match the `period` query parameter of `/dashboard/revenue`.

use salesdesk_api_models::{
    DashboardStats, RevenuePoint, RevenueQuery, TopCustomer, TopProduct,
};

/// Time window selected on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Period {
    /// 24 hourly buckets.
    Day,
    /// 7 weekday buckets.
    Week,
    /// 30 daily buckets.
    #[default]
    Month,
    /// 12 monthly buckets.
    Year,
}

impl Period {
    /// Periods in selector order.
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    /// Query token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Parse a query token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|period| period.token() == token)
    }

    /// Selector button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Ngày",
            Self::Week => "Tuần",
            Self::Month => "Tháng",
            Self::Year => "Năm",
        }
    }

    /// Noun used in the chart subtitle.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Day => "ngày",
            Self::Week => "tuần",
            Self::Month => "tháng",
            Self::Year => "năm",
        }
    }

    /// Number of buckets in the revenue series.
    #[must_use]
    pub const fn bucket_count(self) -> usize {
        match self {
            Self::Day => 24,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 12,
        }
    }

    /// Revenue query for this period with no explicit window.
    #[must_use]
    pub fn revenue_query(self) -> RevenueQuery {
        RevenueQuery {
            period: self.token().to_string(),
            start_date: None,
            end_date: None,
        }
    }
}

/// Display-ready dashboard aggregate.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    /// Headline figures and growth.
    pub stats: DashboardStats,
    /// Revenue per bucket, in bucket order.
    pub revenue_series: Vec<RevenuePoint>,
    /// Best-selling products, in ranking order.
    pub top_products: Vec<TopProduct>,
    /// Best customers, in ranking order.
    pub top_customers: Vec<TopCustomer>,
}

/// Series renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChartKind {
    /// Polyline with point markers.
    #[default]
    Line,
    /// Vertical bars.
    Bar,
}

/// Lower dashboard tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DashboardTab {
    /// Top products.
    #[default]
    Products,
    /// Top customers.
    Customers,
    /// Sales summary.
    Summary,
}

impl DashboardTab {
    /// Tabs in display order.
    pub const ALL: [Self; 3] = [Self::Products, Self::Customers, Self::Summary];

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Products => "Top 5 sản phẩm",
            Self::Customers => "Top 5 khách hàng",
            Self::Summary => "Tình hình bán hàng",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_tokens_round_trip() {
        for period in Period::ALL {
            assert_eq!(Period::from_token(period.token()), Some(period));
        }
        assert_eq!(Period::from_token("quarter"), None);
        assert_eq!(Period::default(), Period::Month);
    }

    #[test]
    fn bucket_counts_follow_period() {
        let counts: Vec<_> = Period::ALL.iter().map(|p| p.bucket_count()).collect();
        assert_eq!(counts, [24, 7, 30, 12]);
    }

    #[test]
    fn revenue_query_sends_only_the_period() {
        let query = Period::Week.revenue_query();
        assert_eq!(query.pairs(), vec![("period", "week".to_string())]);
    }
}
