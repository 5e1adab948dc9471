//! BoardContext - owned board state plus the id generator
//!
//! The context provides access to the board and utilities. No business logic
//! methods, just data access primitives. Commands do all the work.

use crate::error::{KanbanError, Result};
use crate::types::{Board, Column, ColumnId, IdGenerator, Task, TaskId};

/// Context passed to every command - provides access, not logic
#[derive(Debug, Clone)]
pub struct BoardContext {
    board: Board,
    ids: IdGenerator,
}

impl BoardContext {
    /// Create a context around an existing board.
    ///
    /// Every id already on the board is reserved so freshly issued ids can
    /// never collide with it.
    pub fn new(board: Board) -> Self {
        let mut ids = IdGenerator::new();
        for id in board.tasks.keys() {
            ids.reserve(id.as_str());
        }
        for id in board.columns.keys() {
            ids.reserve(id.as_str());
        }
        Self { board, ids }
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the context and return the board
    pub fn into_board(self) -> Board {
        self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Get a column or fail with `ColumnNotFound`
    pub fn require_column(&self, id: &ColumnId) -> Result<&Column> {
        self.board
            .find_column(id)
            .ok_or_else(|| KanbanError::ColumnNotFound { id: id.to_string() })
    }

    /// Get a task or fail with `TaskNotFound`
    pub fn require_task(&self, id: &TaskId) -> Result<&Task> {
        self.board
            .find_task(id)
            .ok_or_else(|| KanbanError::TaskNotFound { id: id.to_string() })
    }

    pub(crate) fn column_mut(&mut self, id: &ColumnId) -> Result<&mut Column> {
        self.board
            .columns
            .get_mut(id)
            .ok_or_else(|| KanbanError::ColumnNotFound { id: id.to_string() })
    }

    pub(crate) fn task_mut(&mut self, id: &TaskId) -> Result<&mut Task> {
        self.board
            .tasks
            .get_mut(id)
            .ok_or_else(|| KanbanError::TaskNotFound { id: id.to_string() })
    }
}

impl Default for BoardContext {
    fn default() -> Self {
        Self::new(Board::new())
    }
}

/// Reject titles that are empty once trimmed
pub(crate) fn require_title(title: &str, item_type: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(KanbanError::empty_title(item_type));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reserves_existing_ids() {
        let mut board = Board::new();
        board
            .columns
            .insert("column-1".into(), Column::new("column-1", "Todo"));
        board.column_order.push("column-1".into());

        let mut ctx = BoardContext::new(board);
        assert_eq!(ctx.ids_mut().next_column_id().as_str(), "column-2");
    }

    #[test]
    fn test_require_lookups() {
        let ctx = BoardContext::default();
        assert!(matches!(
            ctx.require_column(&"c".into()),
            Err(KanbanError::ColumnNotFound { .. })
        ));
        assert!(matches!(
            ctx.require_task(&"t".into()),
            Err(KanbanError::TaskNotFound { .. })
        ));
    }

    #[test]
    fn test_require_title() {
        assert!(require_title("Ship it", "task").is_ok());
        assert!(require_title("   \t", "task").is_err());
        assert!(require_title("", "column").is_err());
    }
}
