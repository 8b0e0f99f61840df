//! Discount voucher form model.
//!
//! # Design
//! - A voucher deducts revenue from an existing invoice; it carries tax but no further discount.
//! - The voucher number is proposed by the backend and may be overwritten.

use crate::core::form::{FieldErrors, Validator, optional_text, parse_date, parse_number};
use crate::features::lines::{LineForm, lines_complete, subtotal};
use chrono::NaiveDate;
use salesdesk_api_models::{Voucher, VoucherLine, VoucherPayload};

/// Tax rates offered by the editor, in percent.
pub const TAX_RATES: [&str; 4] = ["0", "5", "8", "10"];

/// Derived money amounts of a voucher.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VoucherTotals {
    /// Sum of line amounts.
    pub tiendt: f64,
    /// Tax on the subtotal.
    pub tienthue: f64,
    /// Subtotal plus tax.
    pub tientt: f64,
}

impl VoucherTotals {
    /// Totals for a subtotal and a tax rate in percent.
    #[must_use]
    pub fn compute(tiendt: f64, thuesuat: f64) -> Self {
        let tienthue = tiendt * thuesuat / 100.0;
        Self {
            tiendt,
            tienthue,
            tientt: tiendt + tienthue,
        }
    }
}

/// Editable voucher header plus lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoucherForm {
    /// Voucher number.
    pub sophieu: String,
    /// Issue date as `YYYY-MM-DD`.
    pub ngaylap: String,
    /// Customer code.
    pub makh: String,
    /// Invoice the voucher applies to.
    pub soct: String,
    /// Narrative.
    pub diengiai: String,
    /// Deduction debit account.
    pub tknogiamtru: String,
    /// Payment credit account.
    pub tkcott: String,
    /// Tax debit account.
    pub tknothue: String,
    /// Tax rate in percent.
    pub thuesuat: String,
    /// Line items.
    pub lines: Vec<LineForm>,
}

impl VoucherForm {
    /// Blank voucher dated `today` with one empty line.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            sophieu: String::new(),
            ngaylap: today.format("%Y-%m-%d").to_string(),
            makh: String::new(),
            soct: String::new(),
            diengiai: String::new(),
            tknogiamtru: String::new(),
            tkcott: String::new(),
            tknothue: String::new(),
            thuesuat: "10".into(),
            lines: vec![LineForm::default()],
        }
    }

    /// Totals for the current inputs; an unparsable rate counts as zero.
    #[must_use]
    pub fn totals(&self) -> VoucherTotals {
        VoucherTotals::compute(
            subtotal(&self.lines),
            parse_number(&self.thuesuat).unwrap_or_default(),
        )
    }

    /// Create body, or `None` when the inputs do not parse.
    #[must_use]
    pub fn to_payload(&self) -> Option<VoucherPayload> {
        let totals = self.totals();
        let chi_tiet = self
            .lines
            .iter()
            .map(|line| {
                Some(VoucherLine {
                    maspdv: line.maspdv.trim().to_string(),
                    soluong: parse_number(&line.soluong)?,
                    dongia: parse_number(&line.dongia)?,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(VoucherPayload {
            header: Voucher {
                sophieu: self.sophieu.trim().to_string(),
                ngaylap: parse_date(&self.ngaylap)?.and_hms_opt(0, 0, 0)?,
                makh: self.makh.clone(),
                diengiai: optional_text(&self.diengiai),
                tknogiamtru: self.tknogiamtru.clone(),
                tkcott: self.tkcott.clone(),
                soct: self.soct.clone(),
                thuesuat: parse_number(&self.thuesuat)?,
                tienthue: totals.tienthue,
                tknothue: self.tknothue.clone(),
                tiendt: totals.tiendt,
                tientt: totals.tientt,
            },
            chi_tiet,
        })
    }
}

/// Field rules for the voucher editor.
#[must_use]
pub fn validate(form: &VoucherForm) -> FieldErrors {
    Validator::default()
        .required("sophieu", &form.sophieu, "Vui lòng nhập số phiếu")
        .check(
            "ngaylap",
            parse_date(&form.ngaylap).is_some(),
            "Vui lòng chọn ngày lập",
        )
        .required("makh", &form.makh, "Vui lòng chọn khách hàng")
        .required("soct", &form.soct, "Vui lòng chọn hóa đơn")
        .required(
            "tknogiamtru",
            &form.tknogiamtru,
            "Vui lòng chọn tài khoản nợ giảm trừ",
        )
        .required("tkcott", &form.tkcott, "Vui lòng chọn tài khoản có thanh toán")
        .required("tknothue", &form.tknothue, "Vui lòng chọn tài khoản nợ thuế")
        .within("thuesuat", &form.thuesuat, 0.0, 100.0, "Vui lòng chọn thuế suất")
        .check(
            "items",
            lines_complete(&form.lines),
            "Vui lòng điền đầy đủ thông tin cho các chi tiết phiếu",
        )
        .finish()
}

/// Case-insensitive match on voucher number, invoice or customer code.
#[must_use]
pub fn matches(voucher: &Voucher, keyword: &str) -> bool {
    let needle = keyword.trim().to_lowercase();
    needle.is_empty()
        || [&voucher.sophieu, &voucher.soct, &voucher.makh]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> VoucherForm {
        let mut form = VoucherForm::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        form.sophieu = "PGG0003".into();
        form.makh = "KH002".into();
        form.soct = "HD0010".into();
        form.tknogiamtru = "5211".into();
        form.tkcott = "131".into();
        form.tknothue = "3331".into();
        form.lines = vec![LineForm {
            maspdv: "SP001".into(),
            soluong: "4".into(),
            dvt: String::new(),
            dongia: "250000".into(),
        }];
        form
    }

    #[test]
    fn total_is_subtotal_plus_tax_without_discount() {
        let totals = filled().totals();
        assert!((totals.tiendt - 1_000_000.0).abs() < f64::EPSILON);
        assert!((totals.tienthue - 100_000.0).abs() < f64::EPSILON);
        assert!((totals.tientt - 1_100_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn every_account_and_reference_is_required() {
        let errors = validate(&VoucherForm::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
        assert_eq!(errors.get("soct"), Some("Vui lòng chọn hóa đơn"));
        assert_eq!(errors.get("tknothue"), Some("Vui lòng chọn tài khoản nợ thuế"));
        assert_eq!(
            errors.get("items"),
            Some("Vui lòng điền đầy đủ thông tin cho các chi tiết phiếu")
        );
        assert!(!errors.has("ngaylap"));
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn payload_carries_derived_totals() {
        let payload = filled().to_payload().unwrap();
        assert!((payload.header.tientt - 1_100_000.0).abs() < f64::EPSILON);
        assert_eq!(payload.chi_tiet[0].maspdv, "SP001");
        assert!(matches(&payload.header, "hd0010"));
        assert!(!matches(&payload.header, "HD0011"));
    }
}
