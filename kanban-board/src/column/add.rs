//! AddColumn command

use crate::context::{require_title, BoardContext};
use crate::error::{KanbanError, Result};
use crate::operation::{operation, Execute, ExecutionResult};
use crate::types::Column;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Add a new empty column at the end of the board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddColumn {
    /// The column display name
    pub title: String,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Add a new column to the board"
);

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Column> {
        require_title(&self.title, "column")?;

        let id = ctx.ids_mut().next_column_id();
        let column = Column::new(id.clone(), self.title.clone());

        let board = ctx.board_mut();
        board.columns.insert(id.clone(), column.clone());
        board.column_order.push(id);

        Ok(column)
    }
}

impl Execute<BoardContext, KanbanError> for AddColumn {
    type Output = Column;

    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Column, KanbanError> {
        let started = Instant::now();
        ExecutionResult::logged(self, started, self.apply(ctx))
    }
}
