//! In-memory kanban board engine with drag-and-drop reordering
//!
//! This crate models a board of ordered columns holding ordered tasks, and the
//! gesture protocol that reorders them. All state lives in memory for the
//! lifetime of a [`BoardStore`].
//!
//! ## Overview
//!
//! - **Commands** - Every operation is a struct whose fields are its parameters
//! - **Atomic** - An operation either applies fully or returns an error and changes nothing
//! - **Lazy drops** - Hovering records intent only; the board changes once, on drop
//! - **Activity log** - Mutations (and optionally rejections) are kept as [`LogEntry`] values
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_board::{board::demo_board, BoardStore, DragEvent, DragSession, DropHint};
//!
//! let mut store = BoardStore::new(demo_board());
//!
//! // Add a column and a task
//! let blocked = store.add_column("Blocked")?;
//! let task = store.add_task(blocked.clone(), "Waiting on review", "")?;
//!
//! // Move a task directly...
//! store.move_task("task-1", "column-1", "column-2", DropHint::Before("task-4".into()))?;
//!
//! // ...or through a drag gesture
//! let mut session = DragSession::new();
//! for event in [
//!     DragEvent::StartTask { task: task.clone(), column: blocked },
//!     DragEvent::EnterColumn { column: "column-3".into() },
//! ] {
//!     store.dispatch_drag(&mut session, event);
//! }
//! store.dispatch_drag(&mut session, DragEvent::End).transpose()?;
//!
//! store.board().check_integrity()?;
//! # Ok::<(), kanban_board::KanbanError>(())
//! ```

mod context;
mod error;
mod operation;
mod processor;
pub mod types;

pub mod config;
pub mod drag;
pub mod notify;
pub mod script;

// Command modules
pub mod board;
pub mod column;
pub mod task;

pub use config::KanbanConfig;
pub use context::BoardContext;
pub use drag::{DragEvent, DragSession, DragState, DropAction, HoverTarget};
pub use error::{KanbanError, Result};
pub use notify::{Notifier, NotifyKind, RecordingNotifier, TracingNotifier};
pub use operation::{Execute, ExecutionResult, Operation};
pub use processor::BoardStore;
pub use script::{Command, Script, Step, StepError, StepOutcome};

// Re-export commonly used types
pub use types::{Board, Column, ColumnId, DropHint, IdGenerator, LogEntry, LogEntryId, Task, TaskId};
