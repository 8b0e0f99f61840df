//! JSON-backed translations with per-locale bundles.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported UI languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Vietnamese.
    Vi,
    /// English.
    En,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Vi, Self::En]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Vi => "vi",
            Self::En => "en",
        }
    }

    /// Human-friendly label for the language picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vi => "Tiếng Việt",
            Self::En => "English",
        }
    }

    /// Map a browser language tag (`vi-VN`, `en-US`) to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.to_ascii_lowercase();
        let base = lowered.split('-').next().unwrap_or_default();
        Self::all().into_iter().find(|locale| locale.code() == base)
    }
}

/// Default locale; the console is written for Vietnamese accounting staff.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Vi;

/// Parsed translation tree for one locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build the bundle for a locale.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`), falling back to Vietnamese and then `default`.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&VI_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }
}

static VI_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::Vi));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Vi => include_str!("../../i18n/vi.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn english_bundle_overrides_vietnamese() {
        let en = TranslationBundle::new(LocaleCode::En);
        let vi = TranslationBundle::new(LocaleCode::Vi);
        assert_eq!(en.text("nav.customers", ""), "Customers");
        assert_eq!(vi.text("nav.customers", ""), "Khách hàng");
    }

    #[test]
    fn lang_tags_map_to_locales() {
        assert_eq!(LocaleCode::from_lang_tag("vi-VN"), Some(LocaleCode::Vi));
        assert_eq!(LocaleCode::from_lang_tag("EN-us"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("fr"), None);
    }

    #[test]
    fn every_bundle_parses() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert!(!bundle.tree.is_null(), "{} bundle failed to parse", locale.code());
            assert!(!bundle.text("nav.dashboard", "").is_empty());
        }
    }
}
