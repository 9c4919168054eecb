//! Infrastructure adapters for the OpenIDM admin console.
//!
//! Each module implements one `idm-core` port against a concrete technology.

pub mod config;
pub mod error;
pub mod event_bus;
pub mod http;
pub mod render;
pub mod validation;

pub use config::load_config;
pub use error::AdapterError;
pub use event_bus::BroadcastEventBus;
pub use http::HttpUserDelegate;
pub use render::TeraTemplateRenderer;
pub use validation::{FieldRule, RuleSet, RuleValidator};
