//! GetBoard command

use crate::context::BoardContext;
use crate::error::KanbanError;
use crate::operation::{operation, Execute, ExecutionResult};
use crate::types::{Board, ColumnId, Task};
use serde::{Deserialize, Serialize};

/// One column as displayed: header plus its tasks in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneView {
    pub id: ColumnId,
    pub title: String,
    pub task_count: usize,
    pub tasks: Vec<Task>,
}

/// The board as displayed, columns in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub lanes: Vec<LaneView>,
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        let lanes = board
            .lanes()
            .map(|(column, tasks)| LaneView {
                id: column.id.clone(),
                title: column.title.clone(),
                task_count: column.len(),
                tasks: tasks.into_iter().cloned().collect(),
            })
            .collect();
        Self { lanes }
    }
}

/// Get the board with computed task counts
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetBoard;

operation!(
    GetBoard,
    verb = "get",
    noun = "board",
    description = "Retrieve the board with task counts"
);

impl Execute<BoardContext, KanbanError> for GetBoard {
    type Output = BoardView;

    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<BoardView, KanbanError> {
        ExecutionResult::unlogged(Ok(BoardView::from(ctx.board())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::demo_board;

    #[test]
    fn test_get_board() {
        let mut ctx = BoardContext::new(demo_board());
        let result = GetBoard.execute(&mut ctx);
        assert!(!result.should_log());

        let view = result.into_result().unwrap();
        assert_eq!(view.lanes.len(), 3);
        assert_eq!(view.lanes[1].title, "In Progress");
        assert_eq!(view.lanes[1].task_count, 2);
        assert_eq!(view.lanes[1].tasks[0].id.as_str(), "task-3");
    }
}
