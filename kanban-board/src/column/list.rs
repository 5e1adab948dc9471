//! ListColumns command

use crate::context::BoardContext;
use crate::error::KanbanError;
use crate::operation::{operation, Execute, ExecutionResult};
use crate::types::Column;
use serde::{Deserialize, Serialize};

/// List all columns in display order
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListColumns;

operation!(
    ListColumns,
    verb = "list",
    noun = "columns",
    description = "List all columns ordered by position"
);

impl Execute<BoardContext, KanbanError> for ListColumns {
    type Output = Vec<Column>;

    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Vec<Column>, KanbanError> {
        let columns = ctx.board().lanes().map(|(c, _)| c.clone()).collect();
        ExecutionResult::unlogged(Ok(columns))
    }
}
