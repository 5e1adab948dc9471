//! GetTask command

use crate::context::BoardContext;
use crate::error::KanbanError;
use crate::operation::{operation, Execute, ExecutionResult};
use crate::types::{ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A task together with where it sits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub column: ColumnId,
    pub index: usize,
}

/// Get a task by ID with its column and position
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GetTask {
    /// The task ID to retrieve
    pub id: TaskId,
}

operation!(
    GetTask,
    verb = "get",
    noun = "task",
    description = "Retrieve a task by ID with its column and position"
);

impl GetTask {
    /// Create a new GetTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, KanbanError> for GetTask {
    type Output = TaskView;

    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<TaskView, KanbanError> {
        let board = ctx.board();
        let result = ctx.require_task(&self.id).and_then(|task| {
            let column = board.owning_column(&self.id).ok_or_else(|| {
                KanbanError::integrity(format!("task '{}' is not in any column", self.id))
            })?;
            let index = column
                .task_ids
                .iter()
                .position(|id| id == &self.id)
                .unwrap_or_default();
            Ok(TaskView {
                task: task.clone(),
                column: column.id.clone(),
                index,
            })
        });
        ExecutionResult::unlogged(result)
    }
}
