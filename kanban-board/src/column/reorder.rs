//! ReorderColumns command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{operation, Execute, ExecutionResult};
use crate::types::{relocate, ColumnId, DropHint};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Move a column to a new place in the column order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReorderColumns {
    /// The column to move
    pub id: ColumnId,
    /// Where it lands, computed after it is taken out of the order
    #[serde(default)]
    pub hint: DropHint<ColumnId>,
}

operation!(
    ReorderColumns,
    verb = "reorder",
    noun = "columns",
    description = "Move a column to a new position in the column order"
);

impl ReorderColumns {
    pub fn new(id: impl Into<ColumnId>, hint: DropHint<ColumnId>) -> Self {
        Self {
            id: id.into(),
            hint,
        }
    }

    /// Place the column immediately before `target`
    pub fn before(id: impl Into<ColumnId>, target: impl Into<ColumnId>) -> Self {
        Self::new(id, DropHint::Before(target.into()))
    }

    /// Place the column last
    pub fn to_end(id: impl Into<ColumnId>) -> Self {
        Self::new(id, DropHint::Append)
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Vec<ColumnId>> {
        ctx.require_column(&self.id)?;
        if let DropHint::Before(target) = &self.hint {
            if target == &self.id {
                return Err(KanbanError::self_reference(&self.id));
            }
            ctx.require_column(target)?;
        }

        let order = &mut ctx.board_mut().column_order;
        relocate(order, &self.id, &self.hint, "column order")?;
        Ok(order.clone())
    }
}

impl Execute<BoardContext, KanbanError> for ReorderColumns {
    type Output = Vec<ColumnId>;

    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Vec<ColumnId>, KanbanError> {
        let started = Instant::now();
        ExecutionResult::logged(self, started, self.apply(ctx))
    }
}
