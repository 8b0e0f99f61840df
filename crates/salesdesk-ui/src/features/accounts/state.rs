//! Chart-of-accounts form model and table view-model.
//!
//! # Design
//! - Level is cosmetic on the client: it picks a chip colour and an indent, nothing more.
//! - Level filtering and ordering run over the fetched list; the backend returns it unsorted.

use crate::core::form::{FieldErrors, Validator};
use regex::Regex;
use salesdesk_api_models::Account;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Deepest level offered by the editor.
pub const MAX_LEVEL: u8 = 5;

/// Longest accepted account name.
pub const NAME_LIMIT: usize = 100;

/// Indent per level below the root, in pixels.
pub const INDENT_STEP: u32 = 16;

static ACCOUNT_CODE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9.]+$").ok());

/// Chip colours for one level: background then foreground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelColors {
    /// Chip background.
    pub background: &'static str,
    /// Chip text.
    pub foreground: &'static str,
}

/// Colours for `level`; levels outside 1–5 fall back to grey.
#[must_use]
pub const fn level_colors(level: u8) -> LevelColors {
    let (background, foreground) = match level {
        1 => ("#EAE8FD", "#6C5CE7"),
        2 => ("#DEF7EC", "#28C76F"),
        3 => ("#FFF4DE", "#FF9F43"),
        4 => ("#FCE4E4", "#EA5455"),
        5 => ("#E4F1FF", "#0396FF"),
        _ => ("#f5f5f5", "#757575"),
    };
    LevelColors {
        background,
        foreground,
    }
}

/// Left indent for a row at `level`.
#[must_use]
pub fn indent_px(level: u8) -> u32 {
    u32::from(level.saturating_sub(1)) * INDENT_STEP
}

/// Ordering applied to the account table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountSort {
    /// Code ascending.
    #[default]
    CodeAsc,
    /// Code descending.
    CodeDesc,
    /// Name ascending.
    NameAsc,
    /// Name descending.
    NameDesc,
}

impl AccountSort {
    /// Every ordering, in menu order.
    pub const ALL: [Self; 4] = [Self::CodeAsc, Self::CodeDesc, Self::NameAsc, Self::NameDesc];

    /// Stable key used in selects.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CodeAsc => "code-asc",
            Self::CodeDesc => "code-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CodeAsc => "Mã tài khoản (A-Z)",
            Self::CodeDesc => "Mã tài khoản (Z-A)",
            Self::NameAsc => "Tên tài khoản (A-Z)",
            Self::NameDesc => "Tên tài khoản (Z-A)",
        }
    }

    /// Parse a select key; unknown keys keep the default.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.key() == key)
            .unwrap_or_default()
    }

    fn compare(self, a: &Account, b: &Account) -> Ordering {
        match self {
            Self::CodeAsc => a.matk.cmp(&b.matk),
            Self::CodeDesc => b.matk.cmp(&a.matk),
            Self::NameAsc => a.tentk.to_lowercase().cmp(&b.tentk.to_lowercase()),
            Self::NameDesc => b.tentk.to_lowercase().cmp(&a.tentk.to_lowercase()),
        }
    }
}

/// Table query: search text, optional level and ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountQuery {
    /// Matched against code and name, case-insensitively.
    pub keyword: String,
    /// Only this level when set.
    pub level: Option<u8>,
    /// Row ordering.
    pub sort: AccountSort,
}

impl AccountQuery {
    /// Rows of `accounts` that pass the query, ordered.
    #[must_use]
    pub fn apply(&self, accounts: &[Account]) -> Vec<Account> {
        let needle = self.keyword.trim().to_lowercase();
        let mut rows: Vec<Account> = accounts
            .iter()
            .filter(|account| {
                needle.is_empty()
                    || account.matk.to_lowercase().contains(&needle)
                    || account.tentk.to_lowercase().contains(&needle)
            })
            .filter(|account| self.level.is_none_or(|level| account.captk == level))
            .cloned()
            .collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }
}

/// Editable account fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountForm {
    /// Account code.
    pub matk: String,
    /// Account name.
    pub tentk: String,
    /// Level as selected.
    pub captk: String,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            matk: String::new(),
            tentk: String::new(),
            captk: "1".into(),
        }
    }
}

impl AccountForm {
    /// Prefill the form from a stored record.
    #[must_use]
    pub fn from_record(account: &Account) -> Self {
        Self {
            matk: account.matk.clone(),
            tentk: account.tentk.clone(),
            captk: account.captk.to_string(),
        }
    }

    /// Record to send, or `None` when the level does not parse.
    #[must_use]
    pub fn to_record(&self) -> Option<Account> {
        Some(Account {
            matk: self.matk.trim().to_string(),
            tentk: self.tentk.trim().to_string(),
            captk: self.captk.trim().parse().ok()?,
        })
    }
}

/// Field rules for the account editor.
#[must_use]
pub fn validate(form: &AccountForm) -> FieldErrors {
    let level = form.captk.trim().parse::<u8>().ok();
    Validator::default()
        .required("matk", &form.matk, "Vui lòng nhập mã tài khoản")
        .check(
            "matk",
            ACCOUNT_CODE
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(form.matk.trim())),
            "Mã tài khoản chỉ được chứa số và dấu chấm",
        )
        .required("tentk", &form.tentk, "Vui lòng nhập tên tài khoản")
        .check(
            "tentk",
            form.tentk.trim().chars().count() <= NAME_LIMIT,
            "Tên tài khoản không được vượt quá 100 ký tự",
        )
        .check(
            "captk",
            level.is_some_and(|level| (1..=MAX_LEVEL).contains(&level)),
            "Vui lòng chọn cấp tài khoản",
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(matk: &str, tentk: &str, captk: u8) -> Account {
        Account {
            matk: matk.into(),
            tentk: tentk.into(),
            captk,
        }
    }

    #[test]
    fn level_colours_and_indent() {
        assert_eq!(level_colors(1).background, "#EAE8FD");
        assert_eq!(level_colors(3).foreground, "#FF9F43");
        assert_eq!(level_colors(5).foreground, "#0396FF");
        assert_eq!(level_colors(9), level_colors(0));
        assert_eq!(level_colors(0).background, "#f5f5f5");
        assert_eq!(indent_px(1), 0);
        assert_eq!(indent_px(3), 32);
        assert_eq!(indent_px(0), 0);
    }

    #[test]
    fn code_name_and_level_are_required() {
        let errors = validate(&AccountForm {
            captk: "7".into(),
            ..AccountForm::default()
        });
        assert_eq!(errors.get("matk"), Some("Vui lòng nhập mã tài khoản"));
        assert_eq!(errors.get("tentk"), Some("Vui lòng nhập tên tài khoản"));
        assert_eq!(errors.get("captk"), Some("Vui lòng chọn cấp tài khoản"));

        let form = AccountForm {
            matk: "131.A".into(),
            tentk: "Phải thu khách hàng".into(),
            captk: "2".into(),
        };
        assert_eq!(
            validate(&form).get("matk"),
            Some("Mã tài khoản chỉ được chứa số và dấu chấm")
        );
        let valid = AccountForm {
            matk: "1311".into(),
            ..form
        };
        assert!(validate(&valid).is_empty());
        assert_eq!(valid.to_record().map(|record| record.captk), Some(2));
    }

    #[test]
    fn query_filters_by_level_and_orders_rows() {
        let accounts = vec![
            account("511", "Doanh thu bán hàng", 1),
            account("131", "Phải thu khách hàng", 1),
            account("3331", "Thuế GTGT phải nộp", 2),
        ];
        let codes = |rows: Vec<Account>| rows.into_iter().map(|row| row.matk).collect::<Vec<_>>();

        assert_eq!(codes(AccountQuery::default().apply(&accounts)), ["131", "3331", "511"]);
        let level_one = AccountQuery {
            level: Some(1),
            sort: AccountSort::CodeDesc,
            ..AccountQuery::default()
        };
        assert_eq!(codes(level_one.apply(&accounts)), ["511", "131"]);
        let search = AccountQuery {
            keyword: "THU".into(),
            sort: AccountSort::NameAsc,
            ..AccountQuery::default()
        };
        assert_eq!(codes(search.apply(&accounts)), ["511", "131", "3331"]);
        assert_eq!(AccountSort::from_key("name-desc"), AccountSort::NameDesc);
        assert_eq!(AccountSort::from_key("bogus"), AccountSort::CodeAsc);
    }
}
