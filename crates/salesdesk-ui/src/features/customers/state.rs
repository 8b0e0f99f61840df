//! Customer form model.

use crate::core::form::{FieldErrors, Validator, optional_text};
use salesdesk_api_models::Customer;

/// Classifications offered by the editor.
pub const CLASSIFICATIONS: [&str; 3] = ["Cá nhân", "Doanh nghiệp", "Đại lý"];

/// Editable customer fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerForm {
    /// Customer code.
    pub makh: String,
    /// Customer name.
    pub tenkh: String,
    /// Address.
    pub diachi: String,
    /// Phone number.
    pub sdt: String,
    /// Email.
    pub email: String,
    /// Tax code.
    pub masothue: String,
    /// Classification.
    pub phanloai: String,
}

impl CustomerForm {
    /// Prefill the form from a stored record.
    #[must_use]
    pub fn from_record(customer: &Customer) -> Self {
        Self {
            makh: customer.makh.clone(),
            tenkh: customer.tenkh.clone(),
            diachi: customer.diachi.clone(),
            sdt: customer.sdt.clone().unwrap_or_default(),
            email: customer.email.clone().unwrap_or_default(),
            masothue: customer.masothue.clone().unwrap_or_default(),
            phanloai: customer.phanloai.clone().unwrap_or_default(),
        }
    }

    /// Record to send; blank optional fields are omitted.
    #[must_use]
    pub fn to_record(&self) -> Customer {
        Customer {
            makh: self.makh.trim().to_string(),
            tenkh: self.tenkh.trim().to_string(),
            diachi: self.diachi.trim().to_string(),
            sdt: optional_text(&self.sdt),
            email: optional_text(&self.email),
            masothue: optional_text(&self.masothue),
            phanloai: optional_text(&self.phanloai),
        }
    }
}

/// Field rules for the customer editor.
#[must_use]
pub fn validate(form: &CustomerForm) -> FieldErrors {
    Validator::default()
        .required("makh", &form.makh, "Mã khách hàng không được để trống")
        .required("tenkh", &form.tenkh, "Tên khách hàng không được để trống")
        .required("diachi", &form.diachi, "Địa chỉ không được để trống")
        .digits("sdt", &form.sdt, "Số điện thoại chỉ được chứa chữ số")
        .email("email", &form.email, "Email không hợp lệ")
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CustomerForm {
        CustomerForm {
            makh: "KH001".into(),
            tenkh: "Công ty An Phát".into(),
            diachi: "12 Lê Lợi, Quận 1".into(),
            ..CustomerForm::default()
        }
    }

    #[test]
    fn required_fields_are_reported_in_name_order() {
        let errors = validate(&CustomerForm::default());
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["diachi", "makh", "tenkh"]);
    }

    #[test]
    fn optional_contact_fields_are_checked_only_when_given() {
        assert!(validate(&filled()).is_empty());

        let mut form = filled();
        form.sdt = "0903 123".into();
        form.email = "khach@local".into();
        let errors = validate(&form);
        assert_eq!(errors.get("sdt"), Some("Số điện thoại chỉ được chứa chữ số"));
        assert_eq!(errors.get("email"), Some("Email không hợp lệ"));
    }

    #[test]
    fn blank_optionals_are_dropped_from_the_record() {
        let mut form = filled();
        form.sdt = "0903123456".into();
        form.masothue = "   ".into();
        let record = form.to_record();
        assert_eq!(record.sdt.as_deref(), Some("0903123456"));
        assert_eq!(record.masothue, None);
        assert_eq!(CustomerForm::from_record(&record).sdt, "0903123456");
    }
}
