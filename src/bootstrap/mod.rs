pub mod tracing;
pub mod wiring;

pub use self::tracing::init_tracing_subscriber;
pub use wiring::{
    exit_status, load_form_capture, run_registration, wire_registration_view, RegistrationRuntime,
};
