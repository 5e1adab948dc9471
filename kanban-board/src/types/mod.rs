//! Core types for the kanban engine

mod board;
mod ids;
mod log;
mod position;

// Re-export all types
pub use board::{Board, Column, Task};
pub use ids::{ColumnId, IdGenerator, LogEntryId, TaskId, COLUMN_PREFIX, TASK_PREFIX};
pub use log::LogEntry;
pub(crate) use position::relocate;
pub use position::DropHint;
