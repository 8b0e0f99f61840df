//! Discount schedule form model.
//!
//! # Design
//! - A schedule is addressed by product code plus effective date; neither changes on edit.
//! - Routes carry the date as `YYYY-MM-DD`.

use crate::core::form::{FieldErrors, Validator, date_input, parse_date, parse_number};
use chrono::NaiveDate;
use salesdesk_api_models::DiscountSchedule;

/// Editable discount schedule fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscountForm {
    /// Product code.
    pub maspdv: String,
    /// Effective date as `YYYY-MM-DD`.
    pub ngayhl: String,
    /// Order amount threshold as typed.
    pub muctien: String,
    /// Discount rate in percent as typed.
    pub tyleck: String,
}

impl DiscountForm {
    /// Prefill the form from a stored schedule.
    #[must_use]
    pub fn from_record(schedule: &DiscountSchedule) -> Self {
        Self {
            maspdv: schedule.maspdv.clone(),
            ngayhl: date_input(schedule.ngayhl),
            muctien: schedule.muctien.to_string(),
            tyleck: schedule.tyleck.to_string(),
        }
    }

    /// Schedule to send, or `None` when the inputs do not parse.
    #[must_use]
    pub fn to_schedule(&self) -> Option<DiscountSchedule> {
        Some(DiscountSchedule {
            maspdv: self.maspdv.trim().to_string(),
            ngayhl: parse_date(&self.ngayhl)?.and_hms_opt(0, 0, 0)?,
            muctien: parse_number(&self.muctien)?,
            tyleck: parse_number(&self.tyleck)?,
        })
    }
}

/// Field rules for the discount schedule editor.
#[must_use]
pub fn validate(form: &DiscountForm) -> FieldErrors {
    let rate_ok = parse_number(&form.tyleck).is_some_and(|rate| rate > 0.0 && rate <= 100.0);
    Validator::default()
        .required("maspdv", &form.maspdv, "Vui lòng chọn sản phẩm")
        .check(
            "ngayhl",
            parse_date(&form.ngayhl).is_some(),
            "Vui lòng chọn ngày hiệu lực",
        )
        .positive("muctien", &form.muctien, "Mức tiền phải là số dương")
        .check(
            "tyleck",
            rate_ok,
            "Tỷ lệ chiết khấu phải là số dương từ 0 đến 100",
        )
        .finish()
}

/// Key of a schedule as it appears in edit routes.
#[must_use]
pub fn route_key(schedule: &DiscountSchedule) -> (String, String) {
    (schedule.maspdv.clone(), date_input(schedule.ngayhl))
}

/// Parse the date segment of an edit route.
#[must_use]
pub fn parse_route_date(raw: &str) -> Option<NaiveDate> {
    parse_date(raw)
}

/// Single lookup key for the edit page, `maspdv/YYYY-MM-DD`.
#[must_use]
pub fn record_key(maspdv: &str, date: &str) -> String {
    format!("{maspdv}/{date}")
}

/// Split a [`record_key`] back into product code and date.
#[must_use]
pub fn split_record_key(key: &str) -> Option<(&str, NaiveDate)> {
    let (maspdv, date) = key.rsplit_once('/')?;
    Some((maspdv, parse_route_date(date)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> DiscountForm {
        DiscountForm {
            maspdv: "SP002".into(),
            ngayhl: "2024-06-01".into(),
            muctien: "5000000".into(),
            tyleck: "5".into(),
        }
    }

    #[test]
    fn rate_must_be_above_zero_and_at_most_one_hundred() {
        assert!(validate(&filled()).is_empty());
        for bad in ["0", "100.5", "-2", "năm"] {
            let mut form = filled();
            form.tyleck = bad.into();
            assert!(validate(&form).has("tyleck"), "{bad} should be rejected");
        }
        let mut form = filled();
        form.tyleck = "100".into();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn threshold_and_date_are_required() {
        let mut form = filled();
        form.muctien = "0".into();
        form.ngayhl = String::new();
        let errors = validate(&form);
        assert_eq!(errors.get("muctien"), Some("Mức tiền phải là số dương"));
        assert_eq!(errors.get("ngayhl"), Some("Vui lòng chọn ngày hiệu lực"));
    }

    #[test]
    fn route_key_matches_the_route_date_parser() {
        let schedule = filled().to_schedule().unwrap();
        let (code, date) = route_key(&schedule);
        assert_eq!(code, "SP002");
        assert_eq!(parse_route_date(&date), Some(schedule.ngayhl.date()));
        let key = record_key(&code, &date);
        assert_eq!(
            split_record_key(&key),
            Some(("SP002", schedule.ngayhl.date()))
        );
        assert_eq!(split_record_key("SP002/ngay"), None);
    }
}
