//! Form state and field validation shared by every entity editor.
//!
//! # Design
//! - Keep inputs as strings for lossless editing; parse only when validating or saving.
//! - A field reports the first rule it violates; later rules for that field are skipped.
//! - Editing a field clears that field's error and nothing else.
//! - Submission is a gate: invalid or already-submitting forms never reach the network.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::LazyLock;
use yew::Reducible;

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Field name to first violated rule message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// Record a violation unless the field already has one.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether a field failed.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Forget the error for one field.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// No violations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Chainable rule checks that accumulate into [`FieldErrors`].
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    /// Value must be non-blank.
    pub fn required(&mut self, field: &'static str, value: &str, message: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.insert(field, message);
        }
        self
    }

    /// Value must parse to a number strictly greater than zero.
    pub fn positive(&mut self, field: &'static str, value: &str, message: &str) -> &mut Self {
        if !parse_number(value).is_some_and(|n| n > 0.0) {
            self.errors.insert(field, message);
        }
        self
    }

    /// Value must parse to a number within `[min, max]`.
    pub fn within(
        &mut self,
        field: &'static str,
        value: &str,
        min: f64,
        max: f64,
        message: &str,
    ) -> &mut Self {
        if !parse_number(value).is_some_and(|n| (min..=max).contains(&n)) {
            self.errors.insert(field, message);
        }
        self
    }

    /// Optional value; when present it must contain digits only.
    pub fn digits(&mut self, field: &'static str, value: &str, message: &str) -> &mut Self {
        let trimmed = value.trim();
        if !trimmed.is_empty() && !trimmed.chars().all(|c| c.is_ascii_digit()) {
            self.errors.insert(field, message);
        }
        self
    }

    /// Optional value; when present it must look like an email address.
    pub fn email(&mut self, field: &'static str, value: &str, message: &str) -> &mut Self {
        let trimmed = value.trim();
        if !trimmed.is_empty() && !is_email(trimmed) {
            self.errors.insert(field, message);
        }
        self
    }

    /// Fail `field` when `ok` is false.
    pub fn check(&mut self, field: &'static str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.errors.insert(field, message);
        }
        self
    }

    /// Collected violations.
    #[must_use]
    pub fn finish(&mut self) -> FieldErrors {
        std::mem::take(&mut self.errors)
    }
}

/// Values, errors and submission flag of one form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<T> {
    /// Current field values.
    pub values: T,
    /// Errors from the last validation.
    pub errors: FieldErrors,
    /// A mutation is in flight.
    pub submitting: bool,
}

impl<T> FormState<T> {
    /// Fresh form with no errors.
    pub fn new(values: T) -> Self {
        Self {
            values,
            errors: FieldErrors::default(),
            submitting: false,
        }
    }

    /// Edit one field and clear its error.
    pub fn set_field(&mut self, field: &'static str, apply: impl FnOnce(&mut T)) {
        apply(&mut self.values);
        self.errors.clear(field);
    }

    /// Validate and, when valid and idle, mark the form as submitting.
    ///
    /// Returns `true` only when the caller should issue the mutation.
    pub fn begin_submit(&mut self, validate: impl FnOnce(&T) -> FieldErrors) -> bool {
        if self.submitting {
            return false;
        }
        self.errors = validate(&self.values);
        if !self.errors.is_empty() {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Clear the in-flight flag after the mutation resolves.
    pub const fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

/// Transition applied to a [`FormState`] held in a reducer.
pub enum FormAction<T> {
    /// Edit one field and clear its error.
    Set(&'static str, Box<dyn FnOnce(&mut T)>),
    /// Replace every value, e.g. once an edited record has loaded.
    Load(T),
    /// Outcome of a submit attempt.
    Validated {
        /// Violations found.
        errors: FieldErrors,
        /// Whether the mutation was issued.
        submitting: bool,
    },
    /// The mutation resolved.
    Finish,
}

impl<T: Clone> Reducible for FormState<T> {
    type Action = FormAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Set(field, apply) => next.set_field(field, apply),
            FormAction::Load(values) => next = Self::new(values),
            FormAction::Validated { errors, submitting } => {
                next.errors = errors;
                next.submitting = submitting;
            }
            FormAction::Finish => next.finish_submit(),
        }
        Rc::new(next)
    }
}

/// Parse user-typed numbers, accepting `,` as the decimal separator.
#[must_use]
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = trimmed.replace(',', ".").parse::<f64>().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Whether `value` looks like an email address.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(value))
}

/// Parse a `YYYY-MM-DD` date input, also accepting a full ISO timestamp.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let day = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Value for a date input showing `stamp`.
#[must_use]
pub fn date_input(stamp: NaiveDateTime) -> String {
    stamp.date().format("%Y-%m-%d").to_string()
}

/// Blank strings become `None`, everything else is trimmed.
#[must_use]
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Sample {
        name: String,
        price: String,
    }

    fn validate(values: &Sample) -> FieldErrors {
        Validator::default()
            .required("name", &values.name, "name required")
            .required("price", &values.price, "price required")
            .positive("price", &values.price, "price positive")
            .finish()
    }

    #[test]
    fn first_violation_wins_per_field() {
        let errors = validate(&Sample::default());
        assert_eq!(errors.get("price"), Some("price required"));
        assert_eq!(errors.len(), 2);
        let errors = validate(&Sample {
            name: "A".into(),
            price: "-1".into(),
        });
        assert_eq!(errors.get("price"), Some("price positive"));
        assert!(!errors.has("name"));
    }

    #[test]
    fn blank_required_field_blocks_submit_then_correction_allows_it() {
        let mut form = FormState::new(Sample {
            name: String::new(),
            price: "100".into(),
        });
        assert!(!form.begin_submit(validate));
        assert!(!form.submitting);
        assert_eq!(form.errors.get("name"), Some("name required"));

        form.set_field("name", |v| v.name = "Phần mềm".into());
        assert!(form.errors.get("name").is_none());
        assert!(form.begin_submit(validate));
        assert!(form.submitting);
        assert!(!form.begin_submit(validate), "second submit while in flight");
        form.finish_submit();
        assert!(!form.submitting);
    }

    #[test]
    fn set_field_leaves_other_errors() {
        let mut form = FormState::new(Sample::default());
        assert!(!form.begin_submit(validate));
        form.set_field("name", |v| v.name = "A".into());
        assert!(form.errors.has("price"));
    }

    #[test]
    fn numeric_rules_parse_user_input() {
        assert_eq!(parse_number(" 12,5 "), Some(12.5));
        assert_eq!(parse_number("abc"), None);
        let errors = Validator::default()
            .within("rate", "100", 0.0, 100.0, "range")
            .within("low", "-0.1", 0.0, 100.0, "range")
            .finish();
        assert!(!errors.has("rate"));
        assert!(errors.has("low"));
    }

    #[test]
    fn optional_contact_rules_skip_blank_values() {
        let errors = Validator::default()
            .digits("sdt", "", "digits")
            .email("email", "  ", "email")
            .finish();
        assert!(errors.is_empty());
        let errors = Validator::default()
            .digits("sdt", "09 12", "digits")
            .email("email", "ketoan@congty", "email")
            .finish();
        assert_eq!(errors.len(), 2);
        assert!(is_email("ketoan@congty.vn"));
    }

    #[test]
    fn reducer_applies_edits_to_the_latest_state() {
        let state = Rc::new(FormState::new(Sample::default()));
        let state = state.reduce(FormAction::Validated {
            errors: validate(&Sample::default()),
            submitting: false,
        });
        let state = state.reduce(FormAction::Set("name", Box::new(|v: &mut Sample| v.name = "A".into())));
        assert!(!state.errors.has("name"));
        assert!(state.errors.has("price"));
        let state = state.reduce(FormAction::Validated {
            errors: FieldErrors::default(),
            submitting: true,
        });
        let state = state.reduce(FormAction::Finish);
        assert!(!state.submitting);
        assert_eq!(state.values.name, "A");
        let state = state.reduce(FormAction::Load(Sample::default()));
        assert!(state.values.name.is_empty());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn date_inputs_round_trip_through_timestamps() {
        let date = parse_date("2024-03-15T00:00:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(date_input(date.and_hms_opt(8, 30, 0).unwrap()), "2024-03-15");
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("15/03/2024"), None);
    }

    #[test]
    fn optional_text_trims() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" Hà Nội "), Some("Hà Nội".to_string()));
    }
}
