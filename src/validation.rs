//! Form Validation
//!
//! Declarative rule sets evaluated as a pure function of the form input.
//! Field rules run first, in declaration order, and each field keeps only
//! its first failure. Cross-field rules run afterwards and only touch
//! fields that are still clean.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Email format check (no leading dot, no consecutive dots in the local part)
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

/// Single-field predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Non-empty
    Required,
    /// At least N characters (Unicode scalar values)
    MinChars(usize),
    /// Email address format
    Email,
}

impl Check {
    pub fn passes(self, value: &str) -> bool {
        match self {
            Check::Required => !value.is_empty(),
            Check::MinChars(min) => value.chars().count() >= min,
            Check::Email => is_email(value),
        }
    }
}

/// Field identifiers of a form
pub trait FormField: Copy + Ord + Debug + Send + Sync + 'static {
    /// Name used in error keys and the submit log (camelCase)
    fn name(self) -> &'static str;
}

/// A check on one field plus the message shown when it fails
#[derive(Debug, Clone, Copy)]
pub struct FieldRule<F> {
    pub field: F,
    pub check: Check,
    pub message: &'static str,
}

impl<F> FieldRule<F> {
    pub const fn new(field: F, check: Check, message: &'static str) -> Self {
        Self { field, check, message }
    }
}

/// A predicate over the whole input, reported against `target`
pub struct CrossFieldRule<S: FormSchema> {
    pub target: S::Field,
    pub holds: fn(&S) -> bool,
    pub message: &'static str,
}

/// A form input type with its rule set
pub trait FormSchema: Sized + 'static {
    type Field: FormField;

    fn field_rules() -> &'static [FieldRule<Self::Field>];

    fn cross_field_rules() -> &'static [CrossFieldRule<Self>] {
        &[]
    }

    /// Raw value of a field (optional fields read as empty)
    fn value(&self, field: Self::Field) -> &str;
}

/// One invalid field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Per-field validation errors, at most one per field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("form has {} invalid field(s)", .errors.len())]
pub struct FieldErrors<F: FormField> {
    errors: BTreeMap<F, ValidationError>,
}

impl<F: FormField> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { errors: BTreeMap::new() }
    }
}

impl<F: FormField> FieldErrors<F> {
    pub fn get(&self, field: F) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn message(&self, field: F) -> Option<&'static str> {
        self.get(field).map(|e| e.message)
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a failure unless the field already has one
    fn insert(&mut self, field: F, message: &'static str) {
        self.errors.entry(field).or_insert(ValidationError {
            field: field.name(),
            message,
        });
    }
}

/// Run every rule of `S` against `input`
pub fn validate<S: FormSchema>(input: &S) -> Result<(), FieldErrors<S::Field>> {
    let mut errors = FieldErrors::default();

    for rule in S::field_rules() {
        if errors.contains(rule.field) {
            continue;
        }
        if !rule.check.passes(input.value(rule.field)) {
            errors.insert(rule.field, rule.message);
        }
    }

    for rule in S::cross_field_rules() {
        if errors.contains(rule.target) {
            continue;
        }
        if !(rule.holds)(input) {
            errors.insert(rule.target, rule.message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum PairField {
        Left,
        Right,
    }

    impl FormField for PairField {
        fn name(self) -> &'static str {
            match self {
                PairField::Left => "left",
                PairField::Right => "right",
            }
        }
    }

    struct Pair {
        left: String,
        right: String,
    }

    impl FormSchema for Pair {
        type Field = PairField;

        fn field_rules() -> &'static [FieldRule<PairField>] {
            const RULES: &[FieldRule<PairField>] = &[
                FieldRule::new(PairField::Left, Check::Required, "left required"),
                FieldRule::new(PairField::Left, Check::MinChars(3), "left too short"),
                FieldRule::new(PairField::Right, Check::Required, "right required"),
            ];
            RULES
        }

        fn cross_field_rules() -> &'static [CrossFieldRule<Self>] {
            const RULES: &[CrossFieldRule<Pair>] = &[CrossFieldRule {
                target: PairField::Right,
                holds: |p: &Pair| p.left == p.right,
                message: "must match",
            }];
            RULES
        }

        fn value(&self, field: PairField) -> &str {
            match field {
                PairField::Left => &self.left,
                PairField::Right => &self.right,
            }
        }
    }

    fn pair(left: &str, right: &str) -> Pair {
        Pair { left: left.to_string(), right: right.to_string() }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate(&pair("abc", "abc")).is_ok());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let errors = validate(&pair("", "x")).unwrap_err();
        assert_eq!(errors.message(PairField::Left), Some("left required"));

        let errors = validate(&pair("ab", "ab")).unwrap_err();
        assert_eq!(errors.message(PairField::Left), Some("left too short"));
        assert!(!errors.contains(PairField::Right));
    }

    #[test]
    fn test_cross_rule_skips_field_with_error() {
        let errors = validate(&pair("abc", "")).unwrap_err();
        assert_eq!(errors.message(PairField::Right), Some("right required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_cross_rule_reports_on_target() {
        let errors = validate(&pair("abc", "abd")).unwrap_err();
        let err = errors.get(PairField::Right).unwrap();
        assert_eq!(err.field, "right");
        assert_eq!(err.message, "must match");
        assert_eq!(err.to_string(), "right: must match");
        assert_eq!(errors.to_string(), "form has 1 invalid field(s)");
    }

    #[test]
    fn test_min_chars_counts_characters() {
        assert!(Check::MinChars(3).passes("äöü"));
        assert!(!Check::MinChars(4).passes("äöü"));
        assert!(!Check::MinChars(6).passes("😀😀😀"));
    }

    #[test]
    fn test_email_format() {
        for ok in ["a@b.co", "first.last+tag@mail.example.org", "o'neil@x.io"] {
            assert!(is_email(ok), "{ok} should be accepted");
        }
        for bad in ["", "a@b", "@b.co", ".a@b.co", "a..b@c.co", "a@b.c", "a b@c.co", "a@-b.co"] {
            assert!(!is_email(bad), "{bad} should be rejected");
        }
    }
}
