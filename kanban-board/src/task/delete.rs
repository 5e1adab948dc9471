//! DeleteTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{operation, Execute, ExecutionResult};
use crate::types::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Delete a task and remove it from its column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteTask {
    pub id: TaskId,
}

operation!(
    DeleteTask,
    verb = "delete",
    noun = "task",
    description = "Delete a task"
);

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Task> {
        ctx.require_task(&self.id)?;

        let board = ctx.board_mut();
        if let Some(column) = board.columns.values_mut().find(|c| c.contains(&self.id)) {
            column.task_ids.retain(|id| id != &self.id);
        }
        board
            .tasks
            .shift_remove(&self.id)
            .ok_or_else(|| KanbanError::TaskNotFound {
                id: self.id.to_string(),
            })
    }
}

impl Execute<BoardContext, KanbanError> for DeleteTask {
    type Output = Task;

    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Task, KanbanError> {
        let started = Instant::now();
        ExecutionResult::logged(self, started, self.apply(ctx))
    }
}
