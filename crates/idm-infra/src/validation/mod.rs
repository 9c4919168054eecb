//! Declarative form validation.

mod rules;
mod validator;

pub use rules::{FieldRule, FieldViolation, RuleSet};
pub use validator::RuleValidator;
