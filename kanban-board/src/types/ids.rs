//! Identifier newtypes and the board's id generator.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string reference
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Unique identifier for a task
    TaskId
);
string_id!(
    /// Unique identifier for a column
    ColumnId
);

/// Unique identifier for an activity log entry (ULID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntryId(String);

impl LogEntryId {
    /// Generate a new ULID-based id
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LogEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LogEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const TASK_PREFIX: &str = "task";
pub const COLUMN_PREFIX: &str = "column";

/// Issues board ids of the form `{prefix}-{n}`.
///
/// Counters only move forward and every id ever handed out (or reserved from a
/// seeded board) is remembered, so an id is never issued twice in a session,
/// even after the entity carrying it has been deleted.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    task_counter: u64,
    column_counter: u64,
    issued: HashSet<String>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an externally created id as taken.
    pub fn reserve(&mut self, id: &str) {
        self.issued.insert(id.to_string());
    }

    /// Whether the id has been issued or reserved
    pub fn is_issued(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    /// Issue a fresh task id
    pub fn next_task_id(&mut self) -> TaskId {
        TaskId(Self::next(&mut self.issued, &mut self.task_counter, TASK_PREFIX))
    }

    /// Issue a fresh column id
    pub fn next_column_id(&mut self) -> ColumnId {
        ColumnId(Self::next(
            &mut self.issued,
            &mut self.column_counter,
            COLUMN_PREFIX,
        ))
    }

    fn next(issued: &mut HashSet<String>, counter: &mut u64, prefix: &str) -> String {
        loop {
            *counter += 1;
            let candidate = format!("{prefix}-{counter}");
            if issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
