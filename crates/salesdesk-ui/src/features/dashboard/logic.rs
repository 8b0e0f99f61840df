//! Pure dashboard helpers: placeholder data, ranking bars and chart geometry.
//!
//! # Design
//! - Placeholder revenue comes from a seeded generator so a seed always yields the same series.
//! - Bar widths never divide by zero and always land in `[0, 100]`.
//! - Loading wins over empty and populated regardless of the rows handed in.

use super::state::{DashboardView, Period};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use salesdesk_api_models::{DashboardStats, RevenuePoint, TopCustomer, TopProduct};
use std::ops::Range;

const WEEKDAYS: [&str; 7] = [
    "Thứ 2", "Thứ 3", "Thứ 4", "Thứ 5", "Thứ 6", "Thứ 7", "Chủ nhật",
];
const MONTHS: [&str; 12] = [
    "T1", "T2", "T3", "T4", "T5", "T6", "T7", "T8", "T9", "T10", "T11", "T12",
];

/// Half-open revenue band sampled for one bucket of `period`.
#[must_use]
pub const fn revenue_band(period: Period) -> Range<u32> {
    match period {
        Period::Day => 500_000..5_500_000,
        Period::Week => 5_000_000..25_000_000,
        Period::Month => 1_000_000..11_000_000,
        Period::Year => 20_000_000..120_000_000,
    }
}

/// Bucket labels for `period`, in chart order.
#[must_use]
pub fn bucket_labels(period: Period) -> Vec<String> {
    match period {
        Period::Day => (0..24).map(|hour| format!("{hour}h")).collect(),
        Period::Week => WEEKDAYS.iter().map(ToString::to_string).collect(),
        Period::Month => (1..=30).map(|day| day.to_string()).collect(),
        Period::Year => MONTHS.iter().map(ToString::to_string).collect(),
    }
}

/// Placeholder revenue series for `period`, reproducible for a given `seed`.
#[must_use]
pub fn revenue_series(period: Period, seed: u64) -> Vec<RevenuePoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let band = revenue_band(period);
    bucket_labels(period)
        .into_iter()
        .map(|time| RevenuePoint {
            time,
            revenue: f64::from(rng.random_range(band.clone())),
        })
        .collect()
}

/// Placeholder summary shown until the stats endpoint is wired in.
#[must_use]
pub fn mock_view_model(period: Period, seed: u64) -> DashboardView {
    DashboardView {
        stats: DashboardStats {
            total_revenue: 1_256_000_000.0,
            total_invoices: 243,
            avg_order_value: 5_000_000.0,
            revenue_growth: Some(12.5),
            invoice_growth: Some(15.3),
        },
        revenue_series: revenue_series(period, seed),
        top_products: [
            ("Sản phẩm A", 352_000_000.0, 58),
            ("Sản phẩm B", 287_000_000.0, 42),
            ("Sản phẩm C", 254_000_000.0, 35),
            ("Sản phẩm D", 198_000_000.0, 27),
            ("Sản phẩm E", 156_000_000.0, 21),
        ]
        .into_iter()
        .map(|(name, revenue, quantity)| TopProduct {
            maspdv: None,
            name: name.to_string(),
            revenue,
            quantity,
        })
        .collect(),
        top_customers: [
            ("KH001", "Công ty X", 487_000_000.0, 15),
            ("KH012", "Công ty Y", 354_000_000.0, 12),
            ("KH045", "Công ty Z", 298_000_000.0, 8),
            ("KH023", "Công ty W", 225_000_000.0, 7),
            ("KH037", "Công ty V", 192_000_000.0, 6),
        ]
        .into_iter()
        .map(|(makh, name, revenue, invoices)| TopCustomer {
            makh: makh.to_string(),
            name: name.to_string(),
            revenue,
            invoices,
        })
        .collect(),
    }
}

/// Largest revenue in the list, or 0 when empty.
#[must_use]
pub fn max_revenue(revenues: &[f64]) -> f64 {
    revenues.iter().copied().fold(0.0, f64::max)
}

/// Relative bar width in percent.
#[must_use]
pub fn bar_width(revenue: f64, max: f64) -> f64 {
    if max <= 0.0 || !revenue.is_finite() {
        return 0.0;
    }
    (revenue / max * 100.0).clamp(0.0, 100.0)
}

/// Render state of a ranked list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListState {
    /// Progress indicator, no rows.
    Loading,
    /// Explicit no-data message.
    Empty,
    /// Rows in input order.
    Populated,
}

impl ListState {
    /// Pick the state; loading takes precedence.
    #[must_use]
    pub const fn of(loading: bool, len: usize) -> Self {
        if loading {
            Self::Loading
        } else if len == 0 {
            Self::Empty
        } else {
            Self::Populated
        }
    }
}

/// Render state of the headline summary cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryState {
    /// Progress indicator while a fetch is in flight.
    Loading,
    /// Settled without figures, e.g. after a failed first fetch.
    Unavailable,
    /// Figures are present.
    Ready,
}

impl SummaryState {
    /// Pick the state; loading takes precedence.
    #[must_use]
    pub const fn of(loading: bool, has_stats: bool) -> Self {
        if loading {
            Self::Loading
        } else if has_stats {
            Self::Ready
        } else {
            Self::Unavailable
        }
    }
}

/// Avatar initials: first letter of a single word, else first and last words.
#[must_use]
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return "?".to_string();
    };
    let lead = first.chars().next();
    let tail = words.last().and_then(|word| word.chars().next());
    lead.into_iter()
        .chain(tail)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Stable avatar colour derived from a name.
#[must_use]
pub fn avatar_color(name: &str) -> String {
    if name.is_empty() {
        return "#1976d2".to_string();
    }
    let hash = name.encode_utf16().fold(0_i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });
    let channel = |shift: u32| (hash >> shift) & 0xff;
    format!("#{:02x}{:02x}{:02x}", channel(0), channel(8), channel(16))
}

/// Height in px of a bar in a chart `height` px tall.
#[must_use]
pub fn bar_height(revenue: f64, max: f64, height: f64) -> f64 {
    bar_width(revenue, max) / 100.0 * height
}

/// Evenly spaced axis ticks from 0 up to a rounded-up `max`.
#[must_use]
pub fn axis_ticks(max: f64, steps: u32) -> Vec<f64> {
    if max <= 0.0 || steps == 0 {
        return vec![0.0];
    }
    let raw_step = max / f64::from(steps);
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let step = (raw_step / magnitude).ceil() * magnitude;
    (0..=steps).map(|idx| step * f64::from(idx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_lengths_follow_period() {
        for period in Period::ALL {
            assert_eq!(revenue_series(period, 7).len(), period.bucket_count());
        }
    }

    #[test]
    fn series_labels_use_fixed_vocabulary() {
        let day = revenue_series(Period::Day, 1);
        assert_eq!(day[0].time, "0h");
        assert_eq!(day[23].time, "23h");
        let week: Vec<_> = revenue_series(Period::Week, 1)
            .into_iter()
            .map(|p| p.time)
            .collect();
        assert_eq!(week, WEEKDAYS);
        let month = revenue_series(Period::Month, 1);
        assert_eq!(month[0].time, "1");
        assert_eq!(month[29].time, "30");
    }

    #[test]
    fn year_has_exactly_twelve_named_months() {
        let labels: Vec<_> = revenue_series(Period::Year, 42)
            .into_iter()
            .map(|p| p.time)
            .collect();
        assert_eq!(labels, MONTHS);
    }

    #[test]
    fn revenues_stay_inside_band() {
        for period in Period::ALL {
            let band = revenue_band(period);
            for point in revenue_series(period, 99) {
                assert!(point.revenue >= f64::from(band.start));
                assert!(point.revenue < f64::from(band.end));
            }
        }
    }

    #[test]
    fn same_seed_same_series() {
        assert_eq!(
            revenue_series(Period::Month, 5),
            revenue_series(Period::Month, 5)
        );
    }

    #[test]
    fn mock_view_model_matches_placeholder_figures() {
        let view = mock_view_model(Period::Week, 3);
        assert_eq!(view.stats.total_invoices, 243);
        assert_eq!(view.stats.revenue_growth, Some(12.5));
        assert_eq!(view.revenue_series.len(), 7);
        assert_eq!(view.top_products.len(), 5);
        assert_eq!(view.top_customers[0].makh, "KH001");
        assert_eq!(view.top_customers[4].invoices, 6);
    }

    #[test]
    fn bar_widths_are_bounded() {
        let revenues = [487.0, 354.0, 0.0];
        let max = max_revenue(&revenues);
        assert!((max - 487.0).abs() < f64::EPSILON);
        for revenue in revenues {
            let width = bar_width(revenue, max);
            assert!((0.0..=100.0).contains(&width));
        }
        assert!((bar_width(487.0, max) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_max_gives_zero_width() {
        assert!(max_revenue(&[]).abs() < f64::EPSILON);
        let max = max_revenue(&[0.0, 0.0]);
        assert!(bar_width(0.0, max).abs() < f64::EPSILON);
    }

    #[test]
    fn loading_takes_precedence() {
        assert_eq!(ListState::of(true, 5), ListState::Loading);
        assert_eq!(ListState::of(true, 0), ListState::Loading);
        assert_eq!(ListState::of(false, 0), ListState::Empty);
        assert_eq!(ListState::of(false, 2), ListState::Populated);
    }

    #[test]
    fn settled_summary_without_stats_is_not_loading() {
        assert_eq!(SummaryState::of(true, false), SummaryState::Loading);
        assert_eq!(SummaryState::of(true, true), SummaryState::Loading);
        assert_eq!(SummaryState::of(false, false), SummaryState::Unavailable);
        assert_eq!(SummaryState::of(false, true), SummaryState::Ready);
    }

    #[test]
    fn initials_use_first_and_last_word() {
        assert_eq!(initials("Công ty X"), "CX");
        assert_eq!(initials("acme"), "A");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn avatar_colour_is_stable() {
        assert_eq!(avatar_color(""), "#1976d2");
        assert_eq!(avatar_color("A"), "#410000");
        assert_eq!(avatar_color("Công ty Y"), avatar_color("Công ty Y"));
    }

    #[test]
    fn axis_ticks_cover_max() {
        let ticks = axis_ticks(117_000_000.0, 4);
        assert_eq!(ticks.len(), 5);
        assert!(ticks[4] >= 117_000_000.0);
        assert_eq!(axis_ticks(0.0, 4), vec![0.0]);
    }
}
