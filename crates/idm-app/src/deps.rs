//! # View Dependencies / 视图依赖
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;

use idm_core::ports::*;

/// Collaborators of the admin user registration view.
///
/// All dependencies are required - no defaults, no optional fields.
pub struct RegistrationViewDeps {
    pub validator: Arc<dyn FormValidatorPort>,
    pub user_delegate: Arc<dyn UserDelegatePort>,
    pub event_bus: Arc<dyn EventBusPort>,
    pub renderer: Arc<dyn TemplateRendererPort>,
}
