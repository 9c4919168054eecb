//! Admin user registration view.
//!
//! This module coordinates the form lock, the bound validators and the
//! create-user request for a single registration form.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use idm_core::ports::{EventBusPort, FormValidatorPort, TemplateRendererPort, UserDelegatePort};
use idm_core::registration::REGISTRATION_TEMPLATE;
use idm_core::{
    ConsoleEvent, FormLock, FormRoot, MessageKey, RegistrationForm, RegistrationRecord,
};

use super::{IgnoredReason, SubmitEvent, SubmitOutcome};
use crate::deps::RegistrationViewDeps;

/// Errors produced by the registration view lifecycle.
#[derive(Debug, Error)]
pub enum RegistrationViewError {
    #[error("render template `{template}` failed: {source}")]
    Render {
        template: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

/// View that registers a managed user on behalf of an administrator.
///
/// ## Behavior / 行为
/// - `render` renders the template, binds validators and unlocks the form
/// - `on_submit` validates, locks, maps the inputs and creates the user
/// - Conflicts and other failures become display-message events and unlock
/// - A successful registration leaves the form locked until the next render
pub struct AdminUserRegistrationView {
    root: Mutex<FormRoot>,
    lock: FormLock,
    cancellation: Mutex<CancellationToken>,

    validator: Arc<dyn FormValidatorPort>,
    user_delegate: Arc<dyn UserDelegatePort>,
    event_bus: Arc<dyn EventBusPort>,
    renderer: Arc<dyn TemplateRendererPort>,
}

impl AdminUserRegistrationView {
    pub fn new(form_id: impl Into<String>, deps: RegistrationViewDeps) -> Self {
        let RegistrationViewDeps {
            validator,
            user_delegate,
            event_bus,
            renderer,
        } = deps;

        Self {
            root: Mutex::new(FormRoot::new(form_id)),
            // Nothing to submit before the first render.
            lock: FormLock::locked(),
            cancellation: Mutex::new(CancellationToken::new()),
            validator,
            user_delegate,
            event_bus,
            renderer,
        }
    }

    /// Render the template, bind validators and unlock the form.
    ///
    /// Safe to call repeatedly: validators are re-bound per form id, never stacked.
    pub fn render(&self) -> Result<(), RegistrationViewError> {
        let mut root = self.root();
        let _span = info_span!("usecase.admin_user_registration.render", form_id = %root.id())
            .entered();

        self.renderer
            .render(REGISTRATION_TEMPLATE, &mut root)
            .map_err(|source| RegistrationViewError::Render {
                template: REGISTRATION_TEMPLATE,
                source,
            })?;
        self.validator.bind(&root);
        drop(root);

        self.refresh_cancellation();
        self.lock.unlock();
        debug!("registration form rendered and unlocked");
        Ok(())
    }

    /// Handle the submit action of the form.
    pub async fn on_submit(&self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        let root = self.form_snapshot();
        let span = info_span!("usecase.admin_user_registration.submit", form_id = %root.id());

        async {
            if !self.validator.is_valid(&root) {
                debug!("form did not pass validation, ignoring submit");
                return SubmitOutcome::Ignored(IgnoredReason::InvalidForm);
            }
            if !self.lock.try_lock() {
                debug!("form is locked, ignoring submit");
                return SubmitOutcome::Ignored(IgnoredReason::Locked);
            }

            let form = match RegistrationForm::from_root(&root) {
                Ok(form) => form,
                Err(err) => {
                    warn!(error = %err, "registration form could not be mapped");
                    self.lock.unlock();
                    return SubmitOutcome::Rejected(err);
                }
            };
            let record = RegistrationRecord::from_form(form);

            info!(user_name = %record.user_name, "adding user");
            self.create_user(record).await
        }
        .instrument(span)
        .await
    }

    /// Re-check the bound rules and toggle the submit control.
    pub fn on_validate(&self) -> bool {
        let mut root = self.root();
        let valid = self.validator.is_valid(&root);
        root.set_submit_enabled(valid);
        valid
    }

    /// Cancel any in-flight create request; the pending submit unlocks without events.
    pub fn teardown(&self) {
        self.cancellation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel();
        debug!("registration view torn down");
    }

    pub fn set_field(&self, name: impl Into<String>, value: impl Into<String>) {
        self.root().set_field(name, value);
    }

    pub fn clear_field(&self, name: &str) -> Option<String> {
        self.root().clear_field(name)
    }

    pub fn form_snapshot(&self) -> FormRoot {
        self.root().clone()
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    async fn create_user(&self, record: RegistrationRecord) -> SubmitOutcome {
        let cancelled = self
            .cancellation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let result = tokio::select! {
            biased;
            _ = cancelled.cancelled() => {
                info!(user_name = %record.user_name, "registration cancelled by view teardown");
                self.lock.unlock();
                return SubmitOutcome::Cancelled;
            }
            result = self.user_delegate.create_entity(&record) => result,
        };

        match result {
            Ok(created) => {
                info!(user_name = %record.user_name, id = ?created.id, "user registered");
                // Navigation away from the view follows; the lock is reset by the next render.
                self.event_bus.publish(ConsoleEvent::UserSuccessfullyRegistered {
                    user: record,
                    self_registration: false,
                });
                SubmitOutcome::Registered(created)
            }
            Err(failure) => {
                warn!(user_name = %record.user_name, error = %failure, "user registration failed");
                let key = if failure.is_conflict() {
                    MessageKey::UserAlreadyExists
                } else {
                    MessageKey::Unknown
                };
                self.event_bus
                    .publish(ConsoleEvent::DisplayMessageRequest(key));
                self.lock.unlock();
                SubmitOutcome::Failed(key)
            }
        }
    }

    fn refresh_cancellation(&self) {
        let mut token = self
            .cancellation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if token.is_cancelled() {
            *token = CancellationToken::new();
        }
    }

    fn root(&self) -> MutexGuard<'_, FormRoot> {
        self.root.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
