use crate::error::{BridgeError, ErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type Arguments = serde_json::Map<String, Value>;

/// A named request from the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    #[serde(alias = "method")]
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Arguments>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: None,
        }
    }

    pub fn with_argument(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.arguments
            .get_or_insert_with(Arguments::new)
            .insert(key.to_string(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandResult {
    /// `payload: None` is a valid answer (e.g. no icon for a package).
    Success { payload: Option<Value> },
    Failure { kind: ErrorKind, message: String },
}

impl CommandResult {
    pub fn success(payload: impl Into<Value>) -> Self {
        CommandResult::Success {
            payload: Some(payload.into()),
        }
    }

    pub fn empty() -> Self {
        CommandResult::Success { payload: None }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandResult::Success { .. })
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            CommandResult::Success { payload } => payload.as_ref(),
            CommandResult::Failure { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            CommandResult::Success { .. } => None,
            CommandResult::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl From<BridgeError> for CommandResult {
    fn from(err: BridgeError) -> Self {
        CommandResult::Failure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<Result<Option<Value>, BridgeError>> for CommandResult {
    fn from(result: Result<Option<Value>, BridgeError>) -> Self {
        match result {
            Ok(payload) => CommandResult::Success { payload },
            Err(err) => err.into(),
        }
    }
}

/// Fetch a required string argument.
///
/// Absent, null and non-string values all count as missing.
pub fn required_str<'a>(args: &'a Arguments, field: &str) -> Result<&'a str, BridgeError> {
    args.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| BridgeError::MissingArgument(field.to_string()))
}
