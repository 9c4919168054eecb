use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use idm_core::ports::FormValidatorPort;
use idm_core::FormRoot;

use super::{FieldViolation, RuleSet};

/// Validator that binds one rule set per form id.
///
/// Binding an id that is already bound replaces its entry, so a re-rendered
/// form never ends up with stacked rule sets.
#[derive(Debug)]
pub struct RuleValidator {
    rules: RuleSet,
    bound: RwLock<HashMap<String, RuleSet>>,
}

impl RuleValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            bound: RwLock::new(HashMap::new()),
        }
    }

    pub fn is_bound(&self, form_id: &str) -> bool {
        self.bound
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(form_id)
    }

    pub fn bound_count(&self) -> usize {
        self.bound
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Violations for inline display; `None` when the form is not bound.
    pub fn violations(&self, root: &FormRoot) -> Option<Vec<FieldViolation>> {
        self.bound
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(root.id())
            .map(|rules| rules.violations(root))
    }
}

impl FormValidatorPort for RuleValidator {
    fn bind(&self, root: &FormRoot) {
        let replaced = self
            .bound
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(root.id().to_string(), self.rules.clone())
            .is_some();
        debug!(form_id = %root.id(), replaced, "validators bound");
    }

    fn is_valid(&self, root: &FormRoot) -> bool {
        match self.violations(root) {
            Some(violations) => {
                if !violations.is_empty() {
                    debug!(form_id = %root.id(), ?violations, "form has rule violations");
                }
                violations.is_empty()
            }
            None => {
                debug!(form_id = %root.id(), "form has no bound validators");
                false
            }
        }
    }
}
