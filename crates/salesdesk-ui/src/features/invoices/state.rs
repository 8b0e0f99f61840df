//! Invoice form model and totals.
//!
//! # Design
//! - Totals are derived from the lines and rates; the header never stores typed totals.
//! - Stored invoices are checked against their lines with a tolerance of one dong.

use crate::core::form::{FieldErrors, Validator, optional_text, parse_date, parse_number};
use crate::features::lines::{LineForm, lines_complete, subtotal};
use chrono::NaiveDate;
use salesdesk_api_models::{Invoice, InvoiceLine, InvoicePayload};

/// Payment methods offered by the editor.
pub const PAYMENT_METHODS: [&str; 3] = ["Tiền mặt", "Chuyển khoản", "Thẻ tín dụng"];

/// Largest gap between stored and recomputed totals still treated as rounding.
pub const TOTAL_TOLERANCE: f64 = 1.0;

/// Derived money amounts of an invoice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InvoiceTotals {
    /// Sum of line amounts.
    pub tiendt: f64,
    /// Tax on the subtotal.
    pub tienthue: f64,
    /// Discount on the subtotal.
    pub tienck: f64,
    /// Amount payable.
    pub tientt: f64,
}

impl InvoiceTotals {
    /// Totals for a subtotal and percentage rates.
    #[must_use]
    pub fn compute(tiendt: f64, thuesuat: f64, tyleck: f64) -> Self {
        let tienthue = tiendt * thuesuat / 100.0;
        let tienck = tiendt * tyleck / 100.0;
        Self {
            tiendt,
            tienthue,
            tienck,
            tientt: tiendt + tienthue - tienck,
        }
    }
}

/// Editable invoice header plus lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoiceForm {
    /// Document number.
    pub soct: String,
    /// Issue date as `YYYY-MM-DD`.
    pub ngaylap: String,
    /// Customer code.
    pub makh: String,
    /// Customer name snapshot.
    pub tenkh: String,
    /// Payment method.
    pub hinhthuctt: String,
    /// Debit account.
    pub tkno: String,
    /// Narrative.
    pub diengiai: String,
    /// Revenue credit account.
    pub tkcodt: String,
    /// Tax credit account.
    pub tkcothue: String,
    /// Tax rate in percent as typed.
    pub thuesuat: String,
    /// Discount rate in percent as typed.
    pub tyleck: String,
    /// Discount account.
    pub tkchietkhau: String,
    /// Line items.
    pub lines: Vec<LineForm>,
}

impl InvoiceForm {
    /// Blank invoice dated `today` with one empty line.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            soct: String::new(),
            ngaylap: today.format("%Y-%m-%d").to_string(),
            makh: String::new(),
            tenkh: String::new(),
            hinhthuctt: PAYMENT_METHODS[0].to_string(),
            tkno: String::new(),
            diengiai: String::new(),
            tkcodt: String::new(),
            tkcothue: String::new(),
            thuesuat: "10".into(),
            tyleck: "0".into(),
            tkchietkhau: String::new(),
            lines: vec![LineForm::default()],
        }
    }

    /// Totals for the current inputs; unparsable rates count as zero.
    #[must_use]
    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals::compute(
            subtotal(&self.lines),
            parse_number(&self.thuesuat).unwrap_or_default(),
            parse_number(&self.tyleck).unwrap_or_default(),
        )
    }

    /// Create body, or `None` when the inputs do not parse.
    #[must_use]
    pub fn to_payload(&self) -> Option<InvoicePayload> {
        let totals = self.totals();
        let chi_tiet = self
            .lines
            .iter()
            .map(|line| {
                Some(InvoiceLine {
                    maspdv: line.maspdv.trim().to_string(),
                    soluong: parse_number(&line.soluong)?,
                    dvt: line.dvt.trim().to_string(),
                    dongia: parse_number(&line.dongia)?,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(InvoicePayload {
            header: Invoice {
                soct: self.soct.trim().to_string(),
                ngaylap: parse_date(&self.ngaylap)?.and_hms_opt(0, 0, 0)?,
                makh: self.makh.clone(),
                tenkh: self.tenkh.clone(),
                hinhthuctt: self.hinhthuctt.clone(),
                tkno: self.tkno.clone(),
                diengiai: optional_text(&self.diengiai),
                tkcodt: self.tkcodt.clone(),
                tkcothue: self.tkcothue.clone(),
                thuesuat: parse_number(&self.thuesuat)?,
                tienthue: totals.tienthue,
                tyleck: parse_number(&self.tyleck)?,
                tkchietkhau: optional_text(&self.tkchietkhau),
                tienck: totals.tienck,
                tiendt: totals.tiendt,
                tientt: totals.tientt,
            },
            chi_tiet,
        })
    }
}

/// Field rules for the invoice editor.
#[must_use]
pub fn validate(form: &InvoiceForm) -> FieldErrors {
    Validator::default()
        .required("soct", &form.soct, "Vui lòng nhập số chứng từ")
        .check(
            "ngaylap",
            parse_date(&form.ngaylap).is_some(),
            "Vui lòng chọn ngày lập",
        )
        .required("makh", &form.makh, "Vui lòng chọn khách hàng")
        .required("hinhthuctt", &form.hinhthuctt, "Vui lòng chọn hình thức thanh toán")
        .required("tkno", &form.tkno, "Vui lòng chọn tài khoản nợ")
        .required("tkcodt", &form.tkcodt, "Vui lòng chọn tài khoản có doanh thu")
        .required("tkcothue", &form.tkcothue, "Vui lòng chọn tài khoản có thuế")
        .within("thuesuat", &form.thuesuat, 0.0, 100.0, "Thuế suất phải từ 0 đến 100")
        .within("tyleck", &form.tyleck, 0.0, 100.0, "Tỷ lệ chiết khấu phải từ 0 đến 100")
        .check(
            "items",
            lines_complete(&form.lines),
            "Vui lòng điền đầy đủ thông tin cho các chi tiết hóa đơn",
        )
        .finish()
}

/// Whether a stored invoice's totals agree with its lines and rates.
#[must_use]
pub fn totals_consistent(header: &Invoice, lines: &[InvoiceLine]) -> bool {
    let tiendt: f64 = lines.iter().map(|line| line.soluong * line.dongia).sum();
    let expected = InvoiceTotals::compute(tiendt, header.thuesuat, header.tyleck);
    [
        (header.tiendt, expected.tiendt),
        (header.tienthue, expected.tienthue),
        (header.tienck, expected.tienck),
        (header.tientt, expected.tientt),
    ]
    .iter()
    .all(|(stored, derived)| (stored - derived).abs() <= TOTAL_TOLERANCE)
}

/// Case-insensitive match on document number, customer code or name.
#[must_use]
pub fn matches(invoice: &Invoice, keyword: &str) -> bool {
    let needle = keyword.trim().to_lowercase();
    needle.is_empty()
        || [&invoice.soct, &invoice.makh, &invoice.tenkh]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn filled() -> InvoiceForm {
        let mut form = InvoiceForm::new(today());
        form.soct = "HD0001".into();
        form.makh = "KH001".into();
        form.tenkh = "Công ty An Phát".into();
        form.tkno = "131".into();
        form.tkcodt = "511".into();
        form.tkcothue = "3331".into();
        form.lines = vec![
            LineForm {
                maspdv: "SP001".into(),
                soluong: "2".into(),
                dvt: "Bộ".into(),
                dongia: "1000000".into(),
            },
            LineForm {
                maspdv: "SP002".into(),
                soluong: "3".into(),
                dvt: "Giờ".into(),
                dongia: "500000".into(),
            },
        ];
        form
    }

    #[test]
    fn new_invoice_has_defaults_and_one_line() {
        let form = InvoiceForm::new(today());
        assert_eq!(form.hinhthuctt, "Tiền mặt");
        assert_eq!(form.thuesuat, "10");
        assert_eq!(form.tyleck, "0");
        assert_eq!(form.ngaylap, "2024-05-20");
        assert_eq!(form.lines.len(), 1);
    }

    #[test]
    fn totals_follow_tax_and_discount_rates() {
        let mut form = filled();
        form.tyleck = "5".into();
        let totals = form.totals();
        assert!((totals.tiendt - 3_500_000.0).abs() < f64::EPSILON);
        assert!((totals.tienthue - 350_000.0).abs() < f64::EPSILON);
        assert!((totals.tienck - 175_000.0).abs() < f64::EPSILON);
        assert!((totals.tientt - 3_675_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn incomplete_lines_and_missing_accounts_block_submit() {
        let errors = validate(&InvoiceForm::new(today()));
        for field in ["soct", "makh", "tkno", "tkcodt", "tkcothue", "items"] {
            assert!(errors.has(field), "{field} should fail");
        }
        assert!(!errors.has("thuesuat"));
        assert!(validate(&filled()).is_empty());

        let mut form = filled();
        form.thuesuat = "120".into();
        assert_eq!(validate(&form).get("thuesuat"), Some("Thuế suất phải từ 0 đến 100"));
    }

    #[test]
    fn payload_totals_pass_the_consistency_check() {
        let payload = filled().to_payload().unwrap();
        assert_eq!(payload.chi_tiet.len(), 2);
        assert!(totals_consistent(&payload.header, &payload.chi_tiet));

        let mut drifted = payload.header.clone();
        drifted.tientt += 0.9;
        assert!(totals_consistent(&drifted, &payload.chi_tiet));
        drifted.tientt += 5.0;
        assert!(!totals_consistent(&drifted, &payload.chi_tiet));
    }

    #[test]
    fn search_matches_number_and_customer() {
        let header = filled().to_payload().unwrap().header;
        assert!(matches(&header, "hd00"));
        assert!(matches(&header, "an phát"));
        assert!(matches(&header, ""));
        assert!(!matches(&header, "KH999"));
    }
}
