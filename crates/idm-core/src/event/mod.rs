//! Application-level console events published on the event bus.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::registration::RegistrationRecord;

/// Message keys understood by the console's message display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    UserAlreadyExists,
    Unknown,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::UserAlreadyExists => "userAlreadyExists",
            MessageKey::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ConsoleEvent {
    /// A user record was accepted by the backend.
    #[serde(rename_all = "camelCase")]
    UserSuccessfullyRegistered {
        user: RegistrationRecord,
        self_registration: bool,
    },
    /// Ask the console to show a localized message.
    DisplayMessageRequest(MessageKey),
}

impl ConsoleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleEvent::UserSuccessfullyRegistered { .. } => "user_successfully_registered",
            ConsoleEvent::DisplayMessageRequest(_) => "display_message_request",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn message_keys_serialize_to_console_keys() {
        assert_eq!(
            serde_json::to_value(MessageKey::UserAlreadyExists).unwrap(),
            json!("userAlreadyExists")
        );
        assert_eq!(MessageKey::Unknown.to_string(), "unknown");
    }

    #[test]
    fn success_event_payload_shape() {
        let user = RegistrationRecord {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            given_name: None,
            family_name: None,
            phone_number: None,
            user_name: "a@b.com".to_string(),
            security_question: 1,
            security_answer: String::new(),
            attributes: BTreeMap::new(),
        };
        let event = ConsoleEvent::UserSuccessfullyRegistered {
            user,
            self_registration: false,
        };

        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["type"], "user_successfully_registered");
        assert_eq!(value["payload"]["selfRegistration"], false);
        assert_eq!(value["payload"]["user"]["userName"], "a@b.com");
        assert_eq!(event.name(), "user_successfully_registered");
    }

    #[test]
    fn display_message_event_payload_is_key() {
        let event = ConsoleEvent::DisplayMessageRequest(MessageKey::Unknown);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({"type": "display_message_request", "payload": "unknown"}));
    }
}
