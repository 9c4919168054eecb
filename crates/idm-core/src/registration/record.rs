use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::RegistrationForm;

/// Placeholder security question id assigned to admin-created users.
pub const DEFAULT_SECURITY_QUESTION: u32 = 1;
/// Admin-created users start without a security answer.
pub const DEFAULT_SECURITY_ANSWER: &str = "";

/// The record sent to the user-management backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub user_name: String,
    pub security_question: u32,
    pub security_answer: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl RegistrationRecord {
    /// Build the backend record: UI-only inputs are dropped, `userName` is the
    /// lower-cased email and the security fields get their placeholders.
    pub fn from_form(form: RegistrationForm) -> Self {
        let RegistrationForm {
            email,
            password,
            password_confirm: _,
            terms: _,
            given_name,
            family_name,
            phone_number,
            attributes,
        } = form;

        Self {
            user_name: email.to_lowercase(),
            email,
            password,
            given_name,
            family_name,
            phone_number,
            security_question: DEFAULT_SECURITY_QUESTION,
            security_answer: DEFAULT_SECURITY_ANSWER.to_string(),
            attributes,
        }
    }
}

impl fmt::Debug for RegistrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRecord")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("given_name", &self.given_name)
            .field("family_name", &self.family_name)
            .field("phone_number", &self.phone_number)
            .field("user_name", &self.user_name)
            .field("security_question", &self.security_question)
            .field("security_answer", &self.security_answer)
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl From<RegistrationForm> for RegistrationRecord {
    fn from(form: RegistrationForm) -> Self {
        Self::from_form(form)
    }
}
