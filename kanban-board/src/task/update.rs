//! UpdateTask command

use crate::context::{require_title, BoardContext};
use crate::error::{KanbanError, Result};
use crate::operation::{operation, Execute, ExecutionResult};
use crate::types::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Update an existing task's title and/or content
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

operation!(
    UpdateTask,
    verb = "update",
    noun = "task",
    description = "Update task properties"
);

impl UpdateTask {
    /// Create a new UpdateTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Task> {
        if let Some(title) = &self.title {
            require_title(title, "task")?;
        }

        let task = ctx.task_mut(&self.id)?;
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(content) = &self.content {
            task.content = content.clone();
        }
        Ok(task.clone())
    }
}

impl Execute<BoardContext, KanbanError> for UpdateTask {
    type Output = Task;

    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Task, KanbanError> {
        let started = Instant::now();
        ExecutionResult::logged(self, started, self.apply(ctx))
    }
}
