//! Port interfaces for the application layer
//!
//! Ports define the contract between the registration view and the
//! collaborators it drives. Infrastructure adapters live in `idm-infra`.

pub mod event_bus;
pub mod renderer;
pub mod user_delegate;
pub mod validator;

pub use event_bus::EventBusPort;
pub use renderer::TemplateRendererPort;
pub use user_delegate::UserDelegatePort;
pub use validator::FormValidatorPort;
