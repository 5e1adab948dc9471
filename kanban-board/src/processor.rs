//! BoardStore - runs operations against an owned board and keeps the activity log
//!
//! Every mutation goes through [`BoardStore::process`], which executes the
//! command, records its log entry and traces the outcome. The convenience
//! methods are thin wrappers that build the command and call `process`.

use crate::column::{AddColumn, DeleteColumn, DeletedColumn, ReorderColumns};
use crate::config::{KanbanConfig, DEFAULT_ACTIVITY_LIMIT};
use crate::context::BoardContext;
use crate::drag::{DragEvent, DragSession, DropAction};
use crate::error::{KanbanError, Result};
use crate::operation::Execute;
use crate::task::{AddTask, DeleteTask, MoveTask};
use crate::types::{Board, Column, ColumnId, DropHint, LogEntry, Task, TaskId};
use std::collections::VecDeque;
use tracing::debug;

/// Owned board plus its activity log
#[derive(Debug, Clone)]
pub struct BoardStore {
    ctx: BoardContext,
    /// Newest first
    activity: VecDeque<LogEntry>,
    activity_limit: usize,
    log_rejections: bool,
    actor: Option<String>,
}

impl BoardStore {
    /// Create a store around `board` with default settings
    pub fn new(board: Board) -> Self {
        Self {
            ctx: BoardContext::new(board),
            activity: VecDeque::new(),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            log_rejections: true,
            actor: None,
        }
    }

    /// Seed a board and apply the activity settings from `config`
    pub fn from_config(config: &KanbanConfig) -> Self {
        let mut store = Self::new(config.seed.build())
            .with_activity_limit(config.activity_limit)
            .with_log_rejections(config.log_rejections);
        store.actor = config.actor.clone();
        store
    }

    /// Record `actor` on every activity entry
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_activity_limit(mut self, limit: usize) -> Self {
        self.activity_limit = limit;
        self.activity.truncate(limit);
        self
    }

    pub fn with_log_rejections(mut self, enabled: bool) -> Self {
        self.log_rejections = enabled;
        self
    }

    pub fn board(&self) -> &Board {
        self.ctx.board()
    }

    pub fn context(&self) -> &BoardContext {
        &self.ctx
    }

    /// Consume the store and return the board
    pub fn into_board(self) -> Board {
        self.ctx.into_board()
    }

    /// Activity entries, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter()
    }

    pub fn activity_len(&self) -> usize {
        self.activity.len()
    }

    /// Run an operation.
    ///
    /// On `Err` the board is unchanged. The log entry, if the operation
    /// produced one, is kept according to the store's activity settings.
    pub fn process<O>(&mut self, op: &O) -> Result<O::Output>
    where
        O: Execute<BoardContext, KanbanError>,
    {
        let (result, log_entry) = op.execute(&mut self.ctx).into_parts();

        match &result {
            Ok(_) => debug!(op = %op.op_string(), "operation applied"),
            Err(error) => debug!(op = %op.op_string(), %error, "operation rejected"),
        }

        if let Some(entry) = log_entry {
            if result.is_ok() || self.log_rejections {
                self.record(entry);
            }
        }

        result
    }

    fn record(&mut self, entry: LogEntry) {
        if self.activity_limit == 0 {
            return;
        }
        let entry = match &self.actor {
            Some(actor) => entry.with_actor(actor.clone()),
            None => entry,
        };
        self.activity.push_front(entry);
        self.activity.truncate(self.activity_limit);
    }

    // =========================================================================
    // Board operations
    // =========================================================================

    /// Append a new empty column and return its id
    pub fn add_column(&mut self, title: impl Into<String>) -> Result<ColumnId> {
        self.process(&AddColumn::new(title)).map(|column| column.id)
    }

    /// Append a new task to `column` and return its id
    pub fn add_task(
        &mut self,
        column: impl Into<ColumnId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<TaskId> {
        let op = AddTask::new(column, title).with_content(content);
        self.process(&op).map(|task| task.id)
    }

    /// Remove a column and every task in it
    pub fn delete_column(&mut self, id: impl Into<ColumnId>) -> Result<DeletedColumn> {
        self.process(&DeleteColumn::new(id))
    }

    pub fn delete_task(&mut self, id: impl Into<TaskId>) -> Result<Task> {
        self.process(&DeleteTask::new(id))
    }

    /// Move a task within or between columns; returns the destination column
    pub fn move_task(
        &mut self,
        id: impl Into<TaskId>,
        source: impl Into<ColumnId>,
        destination: impl Into<ColumnId>,
        hint: DropHint<TaskId>,
    ) -> Result<Column> {
        self.process(&MoveTask::new(id, source, destination, hint))
    }

    /// Move a column within the column order; returns the new order
    pub fn reorder_columns(
        &mut self,
        id: impl Into<ColumnId>,
        hint: DropHint<ColumnId>,
    ) -> Result<Vec<ColumnId>> {
        self.process(&ReorderColumns::new(id, hint))
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    /// Apply the action a finished drag resolved to
    pub fn apply_drop(&mut self, action: &DropAction) -> Result<()> {
        match action {
            DropAction::MoveTask(op) => self.process(op).map(|_| ()),
            DropAction::ReorderColumns(op) => self.process(op).map(|_| ()),
        }
    }

    /// Feed `event` to `session` and apply the drop it resolves to, if any.
    ///
    /// Returns `None` when the event produced no drop.
    pub fn dispatch_drag(
        &mut self,
        session: &mut DragSession,
        event: DragEvent,
    ) -> Option<Result<()>> {
        let action = session.handle(event)?;
        Some(self.apply_drop(&action))
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(Board::new())
    }
}
