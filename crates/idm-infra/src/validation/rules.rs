use std::sync::OnceLock;

use regex::Regex;

use idm_core::registration::{FIELD_EMAIL, FIELD_PASSWORD, FIELD_PASSWORD_CONFIRM, FIELD_TERMS};
use idm_core::FormRoot;

/// A single declarative constraint on one input.
///
/// Only `Required` and `Checked` reject an absent or empty value; the other
/// rules apply to whatever was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    Email,
    MinLength(usize),
    /// Value must equal the value of another input.
    MatchesField(String),
    /// Checkbox must be ticked.
    Checked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub rule: FieldRule,
}

impl FieldRule {
    fn holds(&self, root: &FormRoot, field: &str) -> bool {
        let value = root.field(field).unwrap_or("");
        match self {
            FieldRule::Required => !value.trim().is_empty(),
            FieldRule::Email => value.is_empty() || email_pattern().is_match(value),
            FieldRule::MinLength(min) => value.is_empty() || value.chars().count() >= *min,
            FieldRule::MatchesField(other) => value == root.field(other).unwrap_or(""),
            FieldRule::Checked => root.is_checked(field),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Ordered rules per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<(String, Vec<FieldRule>)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, rules: Vec<FieldRule>) -> Self {
        self.rules.push((name.into(), rules));
        self
    }

    /// Rules of the admin user registration form.
    pub fn admin_registration(password_min_length: usize) -> Self {
        Self::new()
            .field(FIELD_EMAIL, vec![FieldRule::Required, FieldRule::Email])
            .field(
                FIELD_PASSWORD,
                vec![FieldRule::Required, FieldRule::MinLength(password_min_length)],
            )
            .field(
                FIELD_PASSWORD_CONFIRM,
                vec![FieldRule::MatchesField(FIELD_PASSWORD.to_string())],
            )
            .field(FIELD_TERMS, vec![FieldRule::Checked])
    }

    pub fn violations(&self, root: &FormRoot) -> Vec<FieldViolation> {
        self.rules
            .iter()
            .flat_map(|(field, rules)| {
                rules
                    .iter()
                    .filter(|rule| !rule.holds(root, field))
                    .map(|rule| FieldViolation {
                        field: field.clone(),
                        rule: rule.clone(),
                    })
            })
            .collect()
    }

    pub fn is_satisfied(&self, root: &FormRoot) -> bool {
        self.violations(root).is_empty()
    }
}
