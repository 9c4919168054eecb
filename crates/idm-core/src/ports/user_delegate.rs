use async_trait::async_trait;

use crate::registration::{CreatedUser, DelegateFailure, RegistrationRecord};

#[async_trait]
pub trait UserDelegatePort: Send + Sync {
    /// Create a managed user from the record.
    ///
    /// Error semantics:
    /// - `error == "Conflict"` : a user with this identity already exists
    /// - anything else         : generic failure (transport, timeout, server)
    async fn create_entity(
        &self,
        record: &RegistrationRecord,
    ) -> Result<CreatedUser, DelegateFailure>;
}

#[cfg(test)]
mockall::mock! {
    pub UserDelegate {}

    #[async_trait]
    impl UserDelegatePort for UserDelegate {
        async fn create_entity(
            &self,
            record: &RegistrationRecord,
        ) -> Result<CreatedUser, DelegateFailure>;
    }
}
