use crate::registration::FormRoot;

pub trait FormValidatorPort: Send + Sync {
    /// Attach the declarative rules to a rendered form.
    ///
    /// Requirements:
    /// - Idempotent per form id (re-binding replaces, never duplicates)
    fn bind(&self, root: &FormRoot);

    /// Whether the current inputs satisfy every bound rule.
    ///
    /// An unbound form is never valid.
    fn is_valid(&self, root: &FormRoot) -> bool;
}

#[cfg(test)]
mockall::mock! {
    pub Validator {}

    impl FormValidatorPort for Validator {
        fn bind(&self, root: &FormRoot);
        fn is_valid(&self, root: &FormRoot) -> bool;
    }
}
