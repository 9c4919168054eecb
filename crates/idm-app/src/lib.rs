//! OpenIDM Admin Console Application Layer
//!
//! This crate contains the views' orchestration logic. Collaborators are
//! injected through the ports defined in `idm-core`.

pub mod deps;
pub mod usecases;

pub use deps::RegistrationViewDeps;
pub use usecases::registration::{
    AdminUserRegistrationView, IgnoredReason, RegistrationViewError, SubmitEvent, SubmitOutcome,
};
