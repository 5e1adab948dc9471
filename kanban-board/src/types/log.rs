//! Activity log entries

use super::ids::LogEntryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::Display;
use std::time::Duration;

/// One recorded board mutation, applied or rejected.
///
/// A rejected entry carries `{"error": message}` as its output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub timestamp: DateTime<Utc>,
    /// e.g. "move task"
    pub op: String,
    /// The command as it was submitted
    pub input: Value,
    pub output: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    /// Wall time spent in the command, in microseconds
    pub duration_us: u64,
}

impl LogEntry {
    fn stamped(op: String, input: Value, output: Value, elapsed: Duration) -> Self {
        Self {
            id: LogEntryId::new(),
            timestamp: Utc::now(),
            op,
            input,
            output,
            actor: None,
            duration_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        }
    }

    /// Entry for a command that changed the board
    pub fn applied(op: impl Into<String>, input: Value, output: Value, elapsed: Duration) -> Self {
        Self::stamped(op.into(), input, output, elapsed)
    }

    /// Entry for a command the board refused
    pub fn rejected(
        op: impl Into<String>,
        input: Value,
        error: impl Display,
        elapsed: Duration,
    ) -> Self {
        Self::stamped(
            op.into(),
            input,
            json!({ "error": error.to_string() }),
            elapsed,
        )
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn is_failure(&self) -> bool {
        self.output.get("error").is_some()
    }
}
