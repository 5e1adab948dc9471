//! RenameColumn command

use crate::context::{require_title, BoardContext};
use crate::error::{KanbanError, Result};
use crate::operation::{operation, Execute, ExecutionResult};
use crate::types::{Column, ColumnId};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Change a column's title
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameColumn {
    pub id: ColumnId,
    pub title: String,
}

operation!(
    RenameColumn,
    verb = "rename",
    noun = "column",
    description = "Change a column's title"
);

impl RenameColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Column> {
        require_title(&self.title, "column")?;
        let column = ctx.column_mut(&self.id)?;
        column.title = self.title.clone();
        Ok(column.clone())
    }
}

impl Execute<BoardContext, KanbanError> for RenameColumn {
    type Output = Column;

    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Column, KanbanError> {
        let started = Instant::now();
        ExecutionResult::logged(self, started, self.apply(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::demo_board;

    #[test]
    fn test_rename_column() {
        let mut ctx = BoardContext::new(demo_board());
        let column = RenameColumn::new("column-2", "Doing")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(column.title, "Doing");
        assert_eq!(column.task_ids.len(), 2);
        assert_eq!(
            ctx.board().find_column(&"column-2".into()).unwrap().title,
            "Doing"
        );
    }

    #[test]
    fn test_rename_column_rejections() {
        let mut ctx = BoardContext::new(demo_board());
        let before = ctx.board().clone();

        let empty = RenameColumn::new("column-2", " ").execute(&mut ctx);
        assert!(matches!(
            empty.into_result(),
            Err(KanbanError::EmptyTitle { .. })
        ));

        let missing = RenameColumn::new("column-9", "Doing").execute(&mut ctx);
        assert!(matches!(
            missing.into_result(),
            Err(KanbanError::ColumnNotFound { .. })
        ));

        assert_eq!(ctx.board(), &before);
    }
}
