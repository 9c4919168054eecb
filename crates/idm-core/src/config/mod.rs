//! Console configuration DTO.
//!
//! Pure data: `from_toml` accepts whatever is in the file and fills missing
//! keys with defaults. No validation happens here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/openidm";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;
pub const DEFAULT_FORM_ID: &str = "registration";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base URL of the OpenIDM REST endpoint, without trailing slash.
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub password_min_length: usize,
    /// Element id of the registration form.
    pub form_id: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            admin_username: None,
            admin_password: None,
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            form_id: DEFAULT_FORM_ID.to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section_str = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };
        let section_int = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
        };

        Ok(Self {
            base_url: section_str("backend", "base_url")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout_secs: section_int("backend", "request_timeout_secs")
                .and_then(|v| u64::try_from(v).ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            admin_username: section_str("backend", "admin_username"),
            admin_password: section_str("backend", "admin_password"),
            password_min_length: section_int("validation", "password_min_length")
                .and_then(|v| usize::try_from(v).ok())
                .unwrap_or(DEFAULT_PASSWORD_MIN_LENGTH),
            form_id: section_str("form", "form_id")
                .unwrap_or_else(|| DEFAULT_FORM_ID.to_string()),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_reads_all_sections() {
        let value: toml::Value = toml::from_str(
            r#"
            [backend]
            base_url = "https://idm.example.com/openidm/"
            request_timeout_secs = 5
            admin_username = "openidm-admin"
            admin_password = "openidm-admin"

            [validation]
            password_min_length = 12

            [form]
            form_id = "adminUserRegistration"
            "#,
        )
        .unwrap();

        let config = ConsoleConfig::from_toml(&value).unwrap();

        assert_eq!(config.base_url, "https://idm.example.com/openidm");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.admin_username.as_deref(), Some("openidm-admin"));
        assert_eq!(config.password_min_length, 12);
        assert_eq!(config.form_id, "adminUserRegistration");
    }

    #[test]
    fn from_toml_defaults_missing_keys() {
        let value: toml::Value = toml::from_str("").unwrap();
        let config = ConsoleConfig::from_toml(&value).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn negative_timeout_falls_back_to_default() {
        let value: toml::Value = toml::from_str("[backend]\nrequest_timeout_secs = -1").unwrap();
        let config = ConsoleConfig::from_toml(&value).unwrap();
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }
}
