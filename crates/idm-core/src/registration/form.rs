use std::collections::BTreeMap;

use thiserror::Error;

use super::FormRoot;

pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_PASSWORD_CONFIRM: &str = "passwordConfirm";
pub const FIELD_TERMS: &str = "terms";
pub const FIELD_GIVEN_NAME: &str = "givenName";
pub const FIELD_FAMILY_NAME: &str = "familyName";
pub const FIELD_PHONE_NUMBER: &str = "phoneNumber";

const KNOWN_FIELDS: [&str; 7] = [
    FIELD_EMAIL,
    FIELD_PASSWORD,
    FIELD_PASSWORD_CONFIRM,
    FIELD_TERMS,
    FIELD_GIVEN_NAME,
    FIELD_FAMILY_NAME,
    FIELD_PHONE_NUMBER,
];

/// Record keys derived from the known fields; inputs with these names are dropped.
const DERIVED_FIELDS: [&str; 3] = ["userName", "securityQuestion", "securityAnswer"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationFormError {
    #[error("form `{form_id}` is missing required field `{field}`")]
    MissingField { form_id: String, field: &'static str },
}

/// Typed view of the registration form inputs.
///
/// `password_confirm` and `terms` only exist for client-side validation and
/// never reach the backend record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub password_confirm: Option<String>,
    pub terms: bool,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub phone_number: Option<String>,
    /// Inputs the schema does not name, passed through as string attributes.
    pub attributes: BTreeMap<String, String>,
}

impl RegistrationForm {
    /// Map the inputs of a rendered form into the typed schema.
    pub fn from_root(root: &FormRoot) -> Result<Self, RegistrationFormError> {
        let required = |field: &'static str| {
            root.field(field)
                .map(str::to_string)
                .ok_or_else(|| RegistrationFormError::MissingField {
                    form_id: root.id().to_string(),
                    field,
                })
        };
        let optional = |field: &str| root.field(field).map(str::to_string);

        let attributes = root
            .fields()
            .iter()
            .filter(|(name, _)| {
                !KNOWN_FIELDS.contains(&name.as_str()) && !DERIVED_FIELDS.contains(&name.as_str())
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        Ok(Self {
            email: required(FIELD_EMAIL)?,
            password: required(FIELD_PASSWORD)?,
            password_confirm: optional(FIELD_PASSWORD_CONFIRM),
            terms: root.is_checked(FIELD_TERMS),
            given_name: optional(FIELD_GIVEN_NAME),
            family_name: optional(FIELD_FAMILY_NAME),
            phone_number: optional(FIELD_PHONE_NUMBER),
            attributes,
        })
    }
}

/// Checkbox semantics: browsers post `on` (or the input's value) when checked.
pub(crate) fn is_checked(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "" | "off" | "false" | "0")
}
