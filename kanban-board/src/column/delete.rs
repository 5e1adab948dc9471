//! DeleteColumn command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{operation, Execute, ExecutionResult};
use crate::types::{Column, ColumnId, Task};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// What a column deletion removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedColumn {
    pub column: Column,
    /// The tasks the column referenced, in column order
    pub tasks: Vec<Task>,
}

/// Delete a column together with every task it holds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

operation!(
    DeleteColumn,
    verb = "delete",
    noun = "column",
    description = "Delete a column and all of its tasks"
);

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<DeletedColumn> {
        ctx.require_column(&self.id)?;

        let board = ctx.board_mut();
        let column = board
            .columns
            .shift_remove(&self.id)
            .ok_or_else(|| KanbanError::ColumnNotFound {
                id: self.id.to_string(),
            })?;
        board.column_order.retain(|id| id != &self.id);

        let tasks = column
            .task_ids
            .iter()
            .filter_map(|task_id| board.tasks.shift_remove(task_id))
            .collect();

        Ok(DeletedColumn { column, tasks })
    }
}

impl Execute<BoardContext, KanbanError> for DeleteColumn {
    type Output = DeletedColumn;

    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<DeletedColumn, KanbanError> {
        let started = Instant::now();
        ExecutionResult::logged(self, started, self.apply(ctx))
    }
}
