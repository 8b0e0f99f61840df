//! Product form model.
//!
//! # Design
//! - Keep every input as text until the payload is built.
//! - The code is sent only on create; edits address the record through the URL.

use crate::core::form::{FieldErrors, Validator, optional_text, parse_number};
use salesdesk_api_models::{Product, ProductPayload};

/// Editable product fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Product code.
    pub maspdv: String,
    /// Product name.
    pub tenspdv: String,
    /// Unit price as typed.
    pub dongia: String,
    /// Unit of measure.
    pub dvt: String,
    /// Free-text description.
    pub mota: String,
}

impl ProductForm {
    /// Prefill the form from a stored record.
    #[must_use]
    pub fn from_record(product: &Product) -> Self {
        Self {
            maspdv: product.maspdv.clone(),
            tenspdv: product.tenspdv.clone(),
            dongia: product.dongia.to_string(),
            dvt: product.dvt.clone(),
            mota: product.mota.clone().unwrap_or_default(),
        }
    }

    /// Payload for create (`with_code`) or update.
    #[must_use]
    pub fn to_payload(&self, with_code: bool) -> ProductPayload {
        ProductPayload {
            maspdv: with_code.then(|| self.maspdv.trim().to_string()),
            tenspdv: self.tenspdv.trim().to_string(),
            dongia: parse_number(&self.dongia).unwrap_or_default(),
            dvt: self.dvt.trim().to_string(),
            mota: optional_text(&self.mota),
        }
    }
}

/// Field rules for the product editor.
#[must_use]
pub fn validate(form: &ProductForm) -> FieldErrors {
    Validator::default()
        .required("maspdv", &form.maspdv, "Mã sản phẩm không được để trống")
        .required("tenspdv", &form.tenspdv, "Tên sản phẩm không được để trống")
        .required("dvt", &form.dvt, "Đơn vị tính không được để trống")
        .positive("dongia", &form.dongia, "Đơn giá phải là số dương")
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            maspdv: "SP001".into(),
            tenspdv: "Phần mềm kế toán".into(),
            dongia: 1_500_000.0,
            dvt: "Bộ".into(),
            mota: None,
        }
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = validate(&ProductForm::default());
        assert_eq!(errors.get("tenspdv"), Some("Tên sản phẩm không được để trống"));
        assert_eq!(errors.get("dvt"), Some("Đơn vị tính không được để trống"));
        assert_eq!(errors.get("dongia"), Some("Đơn giá phải là số dương"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn loaded_record_validates_and_round_trips_to_payload() {
        let form = ProductForm::from_record(&sample());
        assert!(validate(&form).is_empty());
        let update = form.to_payload(false);
        assert_eq!(update.maspdv, None);
        assert_eq!(update.dongia, 1_500_000.0);
        assert_eq!(update.mota, None);
        assert_eq!(form.to_payload(true).maspdv.as_deref(), Some("SP001"));
    }

    #[test]
    fn zero_price_is_rejected() {
        let mut form = ProductForm::from_record(&sample());
        form.dongia = "0".into();
        assert!(validate(&form).has("dongia"));
    }
}
