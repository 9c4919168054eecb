use std::fmt;

use serde::{Deserialize, Serialize};

/// `error` value the backend reports for a duplicate user.
pub const CONFLICT_ERROR: &str = "Conflict";

/// Entity returned by the backend after a successful create.
///
/// Empty when the backend acknowledged the create without a usable body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedUser {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    #[serde(flatten)]
    pub body: serde_json::Map<String, serde_json::Value>,
}

/// Failure response of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateFailure {
    /// Short error name, e.g. `Conflict`, `Timeout`, `Internal Server Error`.
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl DelegateFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: None,
            detail: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_conflict(&self) -> bool {
        self.error == CONFLICT_ERROR
    }
}

impl fmt::Display for DelegateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(status) = self.status {
            write!(f, " ({status})")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for DelegateFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_conflict_is_a_conflict() {
        assert!(DelegateFailure::new("Conflict").is_conflict());
        assert!(!DelegateFailure::new("conflict").is_conflict());
        assert!(!DelegateFailure::new("Timeout").is_conflict());
    }

    #[test]
    fn display_includes_status_and_detail() {
        let failure = DelegateFailure::new("Conflict")
            .with_status(409)
            .with_detail("user exists");
        assert_eq!(failure.to_string(), "Conflict (409): user exists");
    }

    #[test]
    fn created_user_extracts_id_and_rev() {
        let user: CreatedUser =
            serde_json::from_str(r#"{"_id":"u1","_rev":"0","userName":"a@b.com"}"#).unwrap();
        assert_eq!(user.id.as_deref(), Some("u1"));
        assert_eq!(user.rev.as_deref(), Some("0"));
        assert_eq!(user.body["userName"], "a@b.com");
    }
}
