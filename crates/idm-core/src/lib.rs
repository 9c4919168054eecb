//! # idm-core
//!
//! Core domain models and ports for the OpenIDM admin console.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod event;
pub mod ports;
pub mod registration;

// Re-export commonly used types at the crate root
pub use config::ConsoleConfig;
pub use event::{ConsoleEvent, MessageKey};
pub use registration::{
    CreatedUser, DelegateFailure, FormLock, FormRoot, RegistrationForm, RegistrationFormError,
    RegistrationRecord,
};
