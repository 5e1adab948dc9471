//! MoveTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{operation, Execute, ExecutionResult};
use crate::types::{relocate, Column, ColumnId, DropHint, TaskId};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Move a task to a new position, within its column or into another one
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// The column currently holding the task
    pub source: ColumnId,
    /// The column receiving the task (may equal `source`)
    pub destination: ColumnId,
    /// Where the task lands, computed after it is taken out of `source`
    #[serde(default)]
    pub hint: DropHint<TaskId>,
}

operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task to a different column or position"
);

impl MoveTask {
    /// Create a new MoveTask command
    pub fn new(
        id: impl Into<TaskId>,
        source: impl Into<ColumnId>,
        destination: impl Into<ColumnId>,
        hint: DropHint<TaskId>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            destination: destination.into(),
            hint,
        }
    }

    /// Move the task to sit immediately before `target` in `destination`
    pub fn before(
        id: impl Into<TaskId>,
        source: impl Into<ColumnId>,
        destination: impl Into<ColumnId>,
        target: impl Into<TaskId>,
    ) -> Self {
        Self::new(id, source, destination, DropHint::Before(target.into()))
    }

    /// Move the task to the end of `destination`
    pub fn to_end(
        id: impl Into<TaskId>,
        source: impl Into<ColumnId>,
        destination: impl Into<ColumnId>,
    ) -> Self {
        Self::new(id, source, destination, DropHint::Append)
    }

    /// Whether this move stays inside one column
    pub fn is_reorder(&self) -> bool {
        self.source == self.destination
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Column> {
        let source = ctx.require_column(&self.source)?;
        ctx.require_column(&self.destination)?;

        if !source.contains(&self.id) {
            return Err(KanbanError::TaskNotInColumn {
                task: self.id.to_string(),
                column: self.source.to_string(),
            });
        }
        if self.hint.target() == Some(&self.id) {
            return Err(KanbanError::self_reference(&self.id));
        }

        let list_name = format!("column '{}'", self.destination);

        if self.is_reorder() {
            let column = ctx.column_mut(&self.source)?;
            relocate(&mut column.task_ids, &self.id, &self.hint, &list_name)?;
            return Ok(column.clone());
        }

        // The task is not in the destination yet, so its list is already "after removal"
        let index = self
            .hint
            .insert_index(&ctx.require_column(&self.destination)?.task_ids, &list_name)?;

        ctx.column_mut(&self.source)?
            .task_ids
            .retain(|id| id != &self.id);
        let destination = ctx.column_mut(&self.destination)?;
        destination.task_ids.insert(index, self.id.clone());

        Ok(destination.clone())
    }
}

impl Execute<BoardContext, KanbanError> for MoveTask {
    type Output = Column;

    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Column, KanbanError> {
        let started = Instant::now();
        ExecutionResult::logged(self, started, self.apply(ctx))
    }
}
