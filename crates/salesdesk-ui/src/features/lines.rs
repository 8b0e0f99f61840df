//! Editable line items shared by invoices and discount vouchers.
//!
//! # Design
//! - Inputs stay as text; amounts are derived on every render.
//! - A document always keeps at least one line.
//! - Picking a product copies its unit and current price into the line.

use crate::core::form::parse_number;
use salesdesk_api_models::Product;

/// One editable line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineForm {
    /// Product code.
    pub maspdv: String,
    /// Quantity as typed.
    pub soluong: String,
    /// Unit of measure.
    pub dvt: String,
    /// Unit price as typed.
    pub dongia: String,
}

impl Default for LineForm {
    fn default() -> Self {
        Self {
            maspdv: String::new(),
            soluong: "1".into(),
            dvt: String::new(),
            dongia: "0".into(),
        }
    }
}

impl LineForm {
    /// Quantity times price, zero when either does not parse.
    #[must_use]
    pub fn amount(&self) -> f64 {
        match (parse_number(&self.soluong), parse_number(&self.dongia)) {
            (Some(qty), Some(price)) => qty * price,
            _ => 0.0,
        }
    }

    /// Product chosen, positive quantity and positive price.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.maspdv.trim().is_empty()
            && parse_number(&self.soluong).is_some_and(|qty| qty > 0.0)
            && parse_number(&self.dongia).is_some_and(|price| price > 0.0)
    }

    /// Select a product and take over its unit and price.
    pub fn pick(&mut self, code: String, catalogue: &[Product]) {
        if let Some(product) = catalogue.iter().find(|product| product.maspdv == code) {
            self.dvt.clone_from(&product.dvt);
            self.dongia = product.dongia.to_string();
        }
        self.maspdv = code;
    }
}

/// Which input of a line changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineField {
    /// Product picker.
    Product,
    /// Quantity input.
    Quantity,
    /// Unit input.
    Unit,
    /// Price input.
    Price,
}

/// Apply one edit to line `index`; out-of-range indexes are ignored.
pub fn edit_line(
    lines: &mut [LineForm],
    index: usize,
    field: LineField,
    value: String,
    catalogue: &[Product],
) {
    let Some(line) = lines.get_mut(index) else {
        return;
    };
    match field {
        LineField::Product => line.pick(value, catalogue),
        LineField::Quantity => line.soluong = value,
        LineField::Unit => line.dvt = value,
        LineField::Price => line.dongia = value,
    }
}

/// Drop line `index` unless it is the last one.
pub fn remove_line(lines: &mut Vec<LineForm>, index: usize) {
    if lines.len() > 1 && index < lines.len() {
        lines.remove(index);
    }
}

/// Sum of line amounts.
#[must_use]
pub fn subtotal(lines: &[LineForm]) -> f64 {
    lines.iter().map(LineForm::amount).sum()
}

/// Every line is complete and there is at least one.
#[must_use]
pub fn lines_complete(lines: &[LineForm]) -> bool {
    !lines.is_empty() && lines.iter().all(LineForm::is_complete)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Vec<Product> {
        vec![Product {
            maspdv: "SP001".into(),
            tenspdv: "Phần mềm kế toán".into(),
            dongia: 2_500_000.0,
            dvt: "Bộ".into(),
            mota: None,
        }]
    }

    #[test]
    fn picking_a_product_fills_unit_and_price() {
        let mut lines = vec![LineForm::default()];
        edit_line(&mut lines, 0, LineField::Product, "SP001".into(), &catalogue());
        assert_eq!(lines[0].dvt, "Bộ");
        assert_eq!(lines[0].dongia, "2500000");
        edit_line(&mut lines, 0, LineField::Quantity, "2".into(), &catalogue());
        assert!((subtotal(&lines) - 5_000_000.0).abs() < f64::EPSILON);
        assert!(lines_complete(&lines));
    }

    #[test]
    fn unknown_product_keeps_typed_price() {
        let mut line = LineForm {
            dongia: "10".into(),
            ..LineForm::default()
        };
        line.pick("SP999".into(), &catalogue());
        assert_eq!(line.maspdv, "SP999");
        assert_eq!(line.dongia, "10");
    }

    #[test]
    fn last_line_cannot_be_removed() {
        let mut lines = vec![LineForm::default(), LineForm::default()];
        remove_line(&mut lines, 1);
        remove_line(&mut lines, 0);
        assert_eq!(lines.len(), 1);
        edit_line(&mut lines, 5, LineField::Price, "1".into(), &[]);
        assert_eq!(lines[0], LineForm::default());
    }

    #[test]
    fn default_line_is_incomplete() {
        assert!(!lines_complete(&[LineForm::default()]));
        assert!(!lines_complete(&[]));
    }
}
