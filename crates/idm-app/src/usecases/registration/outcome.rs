use idm_core::{CreatedUser, MessageKey, RegistrationFormError};

/// UI submit action delivered to the view.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the browser's native form navigation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// Bound rules rejected the current inputs.
    InvalidForm,
    /// A submission from this view is already in flight.
    Locked,
}

/// What a submit attempt ended with.
///
/// Informational only: every branch has already been surfaced to the user
/// through the event bus (or deliberately not, for `Ignored`).
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Ignored(IgnoredReason),
    /// The inputs could not be mapped to a registration form.
    Rejected(RegistrationFormError),
    Registered(CreatedUser),
    Failed(MessageKey),
    /// The view was torn down while the create request was in flight.
    Cancelled,
}

impl SubmitOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, SubmitOutcome::Registered(_))
    }
}
