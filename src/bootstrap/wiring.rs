//! # Dependency Wiring / 依赖注入
//!
//! Builds the concrete adapters from configuration and hands them to the view.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::{info, info_span, warn, Instrument};

use idm_app::{AdminUserRegistrationView, RegistrationViewDeps, SubmitEvent, SubmitOutcome};
use idm_core::{ConsoleConfig, ConsoleEvent};
use idm_infra::{BroadcastEventBus, HttpUserDelegate, RuleSet, RuleValidator, TeraTemplateRenderer};

/// A view together with the bus it publishes on.
pub struct RegistrationRuntime {
    pub view: AdminUserRegistrationView,
    pub event_bus: Arc<BroadcastEventBus>,
}

pub fn wire_registration_view(config: &ConsoleConfig) -> anyhow::Result<RegistrationRuntime> {
    let event_bus = Arc::new(BroadcastEventBus::default());
    let deps = RegistrationViewDeps {
        validator: Arc::new(RuleValidator::new(RuleSet::admin_registration(
            config.password_min_length,
        ))),
        user_delegate: Arc::new(HttpUserDelegate::from_config(config)?),
        event_bus: event_bus.clone(),
        renderer: Arc::new(TeraTemplateRenderer::new()?),
    };

    Ok(RegistrationRuntime {
        view: AdminUserRegistrationView::new(config.form_id.clone(), deps),
        event_bus,
    })
}

/// Read a captured form: a JSON object of input name to string value.
pub fn load_form_capture(path: impl AsRef<Path>) -> anyhow::Result<BTreeMap<String, String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form capture: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Form capture is not a JSON object of strings: {}", path.display()))
}

/// Process exit status for a submit outcome: zero only when the user was registered.
pub fn exit_status(outcome: &SubmitOutcome) -> u8 {
    if outcome.is_registered() {
        0
    } else {
        1
    }
}

/// Render the view, fill it with `fields`, submit once and drain the bus.
pub async fn run_registration(
    config: &ConsoleConfig,
    fields: BTreeMap<String, String>,
) -> anyhow::Result<(SubmitOutcome, Vec<ConsoleEvent>)> {
    let span = info_span!("command.register_user", form_id = %config.form_id);

    async {
        let runtime = wire_registration_view(config)?;
        let mut events = runtime.event_bus.subscribe();

        runtime.view.render()?;
        for (name, value) in fields {
            runtime.view.set_field(name, value);
        }
        if !runtime.view.on_validate() {
            warn!("form does not satisfy the registration rules");
        }

        let outcome = runtime.view.on_submit(&mut SubmitEvent::new()).await;

        let mut published = Vec::new();
        loop {
            match events.try_recv() {
                Ok(event) => {
                    info!(event = event.name(), "console event");
                    published.push(event);
                }
                Err(TryRecvError::Lagged(skipped)) => warn!(skipped, "console events lagged"),
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        Ok((outcome, published))
    }
    .instrument(span)
    .await
}
