//! Price list form model and list filtering.

use crate::core::form::{FieldErrors, Validator, date_input, parse_date, parse_number};
use salesdesk_api_models::PriceListEntry;

/// Editable price list fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriceListForm {
    /// Product code.
    pub maspdv: String,
    /// Effective date as `YYYY-MM-DD`.
    pub ngayhl: String,
    /// Selling price as typed.
    pub giaban: String,
}

impl PriceListForm {
    /// Prefill the form from a stored entry.
    #[must_use]
    pub fn from_record(entry: &PriceListEntry) -> Self {
        Self {
            maspdv: entry.maspdv.clone(),
            ngayhl: date_input(entry.ngayhl),
            giaban: entry.giaban.to_string(),
        }
    }

    /// Entry to send, or `None` when the inputs do not parse.
    #[must_use]
    pub fn to_entry(&self, id: Option<i64>) -> Option<PriceListEntry> {
        Some(PriceListEntry {
            id,
            maspdv: self.maspdv.trim().to_string(),
            ngayhl: parse_date(&self.ngayhl)?.and_hms_opt(0, 0, 0)?,
            giaban: parse_number(&self.giaban)?,
        })
    }
}

/// Field rules for the price list editor.
#[must_use]
pub fn validate(form: &PriceListForm) -> FieldErrors {
    Validator::default()
        .required("maspdv", &form.maspdv, "Vui lòng chọn sản phẩm")
        .check(
            "ngayhl",
            parse_date(&form.ngayhl).is_some(),
            "Vui lòng chọn ngày hiệu lực",
        )
        .positive("giaban", &form.giaban, "Giá bán phải là số dương")
        .finish()
}

/// Path segment of an edit route back to the row id.
#[must_use]
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn blank_form_needs_product_date_and_price() {
        let errors = validate(&PriceListForm::default());
        assert_eq!(errors.get("maspdv"), Some("Vui lòng chọn sản phẩm"));
        assert_eq!(errors.get("ngayhl"), Some("Vui lòng chọn ngày hiệu lực"));
        assert_eq!(errors.get("giaban"), Some("Giá bán phải là số dương"));
    }

    #[test]
    fn valid_form_builds_a_midnight_entry() {
        let form = PriceListForm {
            maspdv: "SP001".into(),
            ngayhl: "2024-01-01".into(),
            giaban: "150000".into(),
        };
        assert!(validate(&form).is_empty());
        let entry = form.to_entry(Some(7)).unwrap();
        assert_eq!(entry.id, Some(7));
        assert_eq!(
            entry.ngayhl,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert!((entry.giaban - 150_000.0).abs() < f64::EPSILON);
        assert_eq!(PriceListForm::from_record(&entry).ngayhl, "2024-01-01");
    }

    #[test]
    fn route_ids_must_be_integers() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("abc"), None);
    }
}
