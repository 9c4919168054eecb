mod outcome;
mod view;

pub use outcome::{IgnoredReason, SubmitEvent, SubmitOutcome};
pub use view::{AdminUserRegistrationView, RegistrationViewError};
