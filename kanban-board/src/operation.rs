//! Operation metadata and execution traits.
//!
//! Operations are structs where the fields ARE the parameters. Each one names
//! itself with a verb/noun pair ("move task") used for logging, and executes
//! against a context that it may mutate.

use crate::types::LogEntry;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::time::Instant;

/// Static metadata describing an operation
pub trait Operation {
    /// The action, e.g. "add"
    fn verb(&self) -> &'static str;
    /// The target, e.g. "task"
    fn noun(&self) -> &'static str;
    /// Human readable description
    fn description(&self) -> &'static str;

    /// Canonical op string, e.g. "add task"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Execute an operation against a context
pub trait Execute<C, E>: Operation {
    type Output;

    fn execute(&self, ctx: &mut C) -> ExecutionResult<Self::Output, E>;
}

/// What came of running a command.
///
/// Mutating commands always produce a log entry, including when they are
/// refused. Reads never do.
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    Logged { value: T, log_entry: LogEntry },
    Unlogged { value: T },
    /// Nothing was mutated
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Drop the log entry and keep the outcome
    pub fn into_result(self) -> Result<T, E> {
        self.into_parts().0
    }

    pub fn into_parts(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    pub fn should_log(&self) -> bool {
        match self {
            Self::Logged { .. } => true,
            Self::Unlogged { .. } => false,
            Self::Failed { log_entry, .. } => log_entry.is_some(),
        }
    }

    /// Outcome of a read; errors are not logged
    pub fn unlogged(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Unlogged { value },
            Err(error) => Self::Failed {
                error,
                log_entry: None,
            },
        }
    }
}

impl<T: Serialize, E: Display> ExecutionResult<T, E> {
    /// Outcome of a mutation started at `started`, with its log entry
    pub fn logged<O>(op: &O, started: Instant, result: Result<T, E>) -> Self
    where
        O: Operation + Serialize,
    {
        let elapsed = started.elapsed();
        let input = serde_json::to_value(op).unwrap_or(Value::Null);

        match result {
            Ok(value) => {
                let output = serde_json::to_value(&value).unwrap_or(Value::Null);
                let log_entry = LogEntry::applied(op.op_string(), input, output, elapsed);
                Self::Logged { value, log_entry }
            }
            Err(error) => {
                let log_entry = LogEntry::rejected(op.op_string(), input, &error, elapsed);
                Self::Failed {
                    error,
                    log_entry: Some(log_entry),
                }
            }
        }
    }
}

/// Implement [`Operation`] for a command struct.
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal) => {
        impl $crate::operation::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }
            fn noun(&self) -> &'static str {
                $noun
            }
            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}

pub(crate) use operation;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pin {
        title: String,
    }

    operation!(Pin, verb = "pin", noun = "card", description = "Pin a card");

    #[test]
    fn test_op_string() {
        let op = Pin {
            title: "x".into(),
        };
        assert_eq!(op.op_string(), "pin card");
        assert_eq!(op.description(), "Pin a card");
    }

    #[test]
    fn test_logged_success_and_failure() {
        let op = Pin {
            title: "x".into(),
        };

        let ok: ExecutionResult<u32, String> = ExecutionResult::logged(&op, Instant::now(), Ok(7));
        assert!(ok.should_log());
        let (value, entry) = ok.into_parts();
        assert_eq!(value.unwrap(), 7);
        let entry = entry.unwrap();
        assert_eq!(entry.op, "pin card");
        assert_eq!(entry.input["title"], "x");
        assert_eq!(entry.output, 7);

        let failed: ExecutionResult<u32, String> =
            ExecutionResult::logged(&op, Instant::now(), Err("nope".to_string()));
        assert!(failed.should_log());
        let (value, entry) = failed.into_parts();
        assert_eq!(value.unwrap_err(), "nope");
        assert!(entry.unwrap().is_failure());
    }

    #[test]
    fn test_unlogged() {
        let read: ExecutionResult<u32, String> = ExecutionResult::unlogged(Ok(1));
        assert!(!read.should_log());
        assert_eq!(read.into_result().unwrap(), 1);

        let missing: ExecutionResult<u32, String> = ExecutionResult::unlogged(Err("gone".into()));
        assert!(!missing.should_log());
    }
}
