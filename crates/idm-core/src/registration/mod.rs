//! User registration domain.
//!
//! ```text
//! FormRoot (raw inputs)
//!     ↓ RegistrationForm::from_root
//! RegistrationForm (typed schema, UI-only fields included)
//!     ↓ RegistrationRecord::from_form
//! RegistrationRecord (backend record, derived fields set)
//! ```

/// Template of the admin user registration view.
pub const REGISTRATION_TEMPLATE: &str = "templates/admin/AdminUserRegistrationTemplate.html";

mod delegate;
mod form;
mod form_root;
mod lock;
mod record;

pub use delegate::{CreatedUser, DelegateFailure, CONFLICT_ERROR};
pub use form::{
    RegistrationForm, RegistrationFormError, FIELD_EMAIL, FIELD_FAMILY_NAME, FIELD_GIVEN_NAME,
    FIELD_PASSWORD, FIELD_PASSWORD_CONFIRM, FIELD_PHONE_NUMBER, FIELD_TERMS,
};
pub use form_root::FormRoot;
pub use lock::FormLock;
pub use record::{RegistrationRecord, DEFAULT_SECURITY_ANSWER, DEFAULT_SECURITY_QUESTION};
