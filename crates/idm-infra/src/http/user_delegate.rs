//! REST adapter for managed user creation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use idm_core::ports::UserDelegatePort;
use idm_core::{ConsoleConfig, CreatedUser, DelegateFailure, RegistrationRecord};

use crate::error::AdapterError;

pub const USERNAME_HEADER: &str = "X-OpenIDM-Username";
pub const PASSWORD_HEADER: &str = "X-OpenIDM-Password";

const TIMEOUT_ERROR: &str = "Timeout";
const NETWORK_ERROR: &str = "Network";

/// Resource error body returned by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: String,
}

/// Creates managed users through `POST {base_url}/managed/user?_action=create`.
#[derive(Debug, Clone)]
pub struct HttpUserDelegate {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl HttpUserDelegate {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AdapterError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AdapterError::HttpClient)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials: None,
        })
    }

    pub fn from_config(config: &ConsoleConfig) -> Result<Self, AdapterError> {
        let delegate = Self::new(config.base_url.clone(), config.request_timeout())?;
        Ok(match (&config.admin_username, &config.admin_password) {
            (Some(username), Some(password)) => delegate.with_credentials(username, password),
            _ => delegate,
        })
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    fn create_url(&self) -> String {
        format!("{}/managed/user?_action=create", self.base_url)
    }
}

#[async_trait]
impl UserDelegatePort for HttpUserDelegate {
    async fn create_entity(
        &self,
        record: &RegistrationRecord,
    ) -> Result<CreatedUser, DelegateFailure> {
        let url = self.create_url();
        debug!(%url, user_name = %record.user_name, "POST create managed user");

        let mut request = self.client.post(&url).json(record);
        if let Some(credentials) = &self.credentials {
            request = request
                .header(USERNAME_HEADER, &credentials.username)
                .header(PASSWORD_HEADER, &credentials.password);
        }

        let response = request.send().await.map_err(transport_failure)?;
        let status = response.status();

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, status = status.as_u16(), "failed to read create user response body");
                String::new()
            }
        };

        if status.is_success() {
            return Ok(created_user(&body));
        }
        Err(status_failure(status, &body))
    }
}

/// The backend already created the user on a 2xx, so an unusable body is not a failure.
fn created_user(body: &str) -> CreatedUser {
    if body.trim().is_empty() {
        debug!("create user response had no body");
        return CreatedUser::default();
    }
    serde_json::from_str(body).unwrap_or_else(|e| {
        warn!(error = %e, "create user response was not a JSON object");
        CreatedUser::default()
    })
}

fn status_failure(status: StatusCode, body: &str) -> DelegateFailure {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let reason = parsed.as_ref().and_then(|b| b.reason.clone());
    let message = parsed.and_then(|b| b.message);

    let error = reason
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| status.as_str().to_string());
    let failure = DelegateFailure::new(error).with_status(status.as_u16());

    match message {
        Some(message) => failure.with_detail(message),
        None if !body.trim().is_empty() => failure.with_detail(body.trim()),
        None => failure,
    }
}

fn transport_failure(error: reqwest::Error) -> DelegateFailure {
    let kind = if error.is_timeout() {
        TIMEOUT_ERROR
    } else {
        NETWORK_ERROR
    };
    DelegateFailure::new(kind).with_detail(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failure_prefers_reason_from_body() {
        let failure = status_failure(
            StatusCode::CONFLICT,
            r#"{"error":409,"reason":"Conflict","message":"user already exists"}"#,
        );
        assert!(failure.is_conflict());
        assert_eq!(failure.status, Some(409));
        assert_eq!(failure.detail.as_deref(), Some("user already exists"));
    }

    #[test]
    fn status_failure_falls_back_to_canonical_reason() {
        let failure = status_failure(StatusCode::CONFLICT, "");
        assert_eq!(failure.error, "Conflict");
        assert_eq!(failure.detail, None);

        let failure = status_failure(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(failure.error, "Internal Server Error");
        assert_eq!(failure.detail.as_deref(), Some("boom"));
    }

    #[test]
    fn unusable_success_body_yields_empty_created_user() {
        assert_eq!(created_user(""), CreatedUser::default());
        assert_eq!(created_user("ok"), CreatedUser::default());
        assert_eq!(created_user(r#"{"_id":"u1"}"#).id.as_deref(), Some("u1"));
    }

    #[test]
    fn create_url_trims_trailing_slash() {
        let delegate =
            HttpUserDelegate::new("http://localhost:8080/openidm/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(
            delegate.create_url(),
            "http://localhost:8080/openidm/managed/user?_action=create"
        );
    }
}
