//! AddTask command

use crate::context::{require_title, BoardContext};
use crate::error::{KanbanError, Result};
use crate::operation::{operation, Execute, ExecutionResult};
use crate::types::{ColumnId, Task};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Add a new task to the end of a column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddTask {
    /// The column that receives the task
    pub column: ColumnId,
    /// The task title
    pub title: String,
    /// Optional free-form content
    #[serde(default)]
    pub content: String,
}

operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Create a new task at the end of a column"
);

impl AddTask {
    /// Create a new AddTask command
    pub fn new(column: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            title: title.into(),
            content: String::new(),
        }
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Task> {
        require_title(&self.title, "task")?;
        ctx.require_column(&self.column)?;

        let id = ctx.ids_mut().next_task_id();
        let task = Task::new(id.clone(), self.title.clone()).with_content(self.content.clone());

        ctx.column_mut(&self.column)?.task_ids.push(id.clone());
        ctx.board_mut().tasks.insert(id, task.clone());

        Ok(task)
    }
}

impl Execute<BoardContext, KanbanError> for AddTask {
    type Output = Task;

    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Task, KanbanError> {
        let started = Instant::now();
        ExecutionResult::logged(self, started, self.apply(ctx))
    }
}
