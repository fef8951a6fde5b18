//! Wire types for the `controller` channel.
//!
//! The JS shim posts `{"id": n, "body": <command>}`; the id only pairs the
//! reply with the pending promise. The bridge itself sees the body, which
//! must be one of the command names below.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BridgeError;

/// The closed set of commands the native side understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// App version, build and the current scripts directory.
    Init,
    /// Present the folder picker; the new directory arrives by push.
    ChangeDirectory,
    /// Reveal the scripts directory in the system file browser.
    OpenDirectory,
}

impl Command {
    pub const ALL: [Command; 3] = [
        Command::Init,
        Command::ChangeDirectory,
        Command::OpenDirectory,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Init => "INIT",
            Command::ChangeDirectory => "CHANGE_DIRECTORY",
            Command::OpenDirectory => "OPEN_DIRECTORY",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Interpret a message body.
    pub fn parse(body: &Value) -> Result<Self, BridgeError> {
        let name = body.as_str().ok_or(BridgeError::MalformedBody)?;
        Self::from_name(name).ok_or_else(|| BridgeError::UnexpectedBody(name.to_string()))
    }
}

/// The `(result, error)` pair answering one request.
///
/// At most one slot is set. Both are empty for commands that only cause a
/// side effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reply {
    pub result: Option<Value>,
    pub error: Option<String>,
}

impl Reply {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn data(value: Value) -> Self {
        Self {
            result: Some(value),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<BridgeError> for Reply {
    fn from(err: BridgeError) -> Self {
        Reply::error(err.to_string())
    }
}

/// Transport wrapper around one request body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    pub id: u64,
    #[serde(default)]
    pub body: Value,
}

impl Envelope {
    /// Parse the raw IPC string. `None` means there is no id to reply to.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_every_command_name() {
        for command in Command::ALL {
            assert_eq!(Command::parse(&json!(command.name())), Ok(command));
        }
    }

    #[test]
    fn unknown_name_is_unexpected() {
        assert_eq!(
            Command::parse(&json!("FOO")),
            Err(BridgeError::UnexpectedBody("FOO".into()))
        );
        assert!(Command::parse(&json!("init")).is_err());
        assert!(Command::parse(&json!("INIT ")).is_err());
        assert!(Command::parse(&json!("")).is_err());
    }

    #[test]
    fn non_string_bodies_are_malformed() {
        for body in [json!(null), json!(42), json!({"command": "INIT"}), json!(["INIT"])] {
            assert_eq!(Command::parse(&body), Err(BridgeError::MalformedBody));
        }
    }

    #[test]
    fn reply_constructors() {
        assert_eq!(Reply::empty(), Reply { result: None, error: None });
        assert!(!Reply::data(json!({})).is_error());
        assert!(Reply::error("x").is_error());
        assert_eq!(
            Reply::from(BridgeError::UnexpectedBody("FOO".into())).error.as_deref(),
            Some("Unexpected message body")
        );
    }

    #[test]
    fn envelope_requires_numeric_id() {
        let env = Envelope::from_json(r#"{"id": 7, "body": "INIT"}"#).unwrap();
        assert_eq!(env.id, 7);
        assert_eq!(env.body, json!("INIT"));

        assert!(Envelope::from_json(r#"{"body": "INIT"}"#).is_none());
        assert!(Envelope::from_json(r#"{"id": "7", "body": "INIT"}"#).is_none());
        assert!(Envelope::from_json("INIT").is_none());
    }

    #[test]
    fn envelope_without_body_reads_as_null() {
        let env = Envelope::from_json(r#"{"id": 1}"#).unwrap();
        assert_eq!(env.body, Value::Null);
    }
}
