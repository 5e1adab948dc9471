//! Board-level types: Board, Column, Task

use super::ids::{ColumnId, TaskId};
use crate::error::{KanbanError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A task/card on the board. Owned by the board's task map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Task {
    /// Create a new task
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
        }
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// A column is an ordered bucket of task references.
///
/// The column owns the ordering of its tasks, never the tasks themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Create a new empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Set the task ids
    pub fn with_tasks<I, T>(mut self, task_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        self.task_ids = task_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Number of tasks in the column
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.task_ids.contains(task_id)
    }
}

/// The root aggregate: tasks, columns, and the column display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub tasks: IndexMap<TaskId, Task>,
    #[serde(default)]
    pub columns: IndexMap<ColumnId, Column>,
    #[serde(default)]
    pub column_order: Vec<ColumnId>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// The column whose task list holds `task_id`
    pub fn owning_column(&self, task_id: &TaskId) -> Option<&Column> {
        self.columns.values().find(|c| c.contains(task_id))
    }

    /// Position of a column in the display order
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.column_order.iter().position(|c| c == id)
    }

    /// Total number of task references across all columns
    pub fn task_count(&self) -> usize {
        self.columns.values().map(Column::len).sum()
    }

    /// Columns in display order, each paired with its tasks in order.
    ///
    /// Dangling references are skipped; `check_integrity` reports them.
    pub fn lanes(&self) -> impl Iterator<Item = (&Column, Vec<&Task>)> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id))
            .map(|column| {
                let tasks = column
                    .task_ids
                    .iter()
                    .filter_map(|id| self.tasks.get(id))
                    .collect();
                (column, tasks)
            })
    }

    /// Verify the board invariants.
    ///
    /// - every task id in a column exists in `tasks`, and every task sits in
    ///   exactly one column exactly once
    /// - `column_order` is a permutation of the column keys
    /// - map keys agree with the ids stored in the values
    pub fn check_integrity(&self) -> Result<()> {
        for (key, task) in &self.tasks {
            if key != &task.id {
                return Err(KanbanError::integrity(format!(
                    "task stored under '{key}' has id '{}'",
                    task.id
                )));
            }
        }

        let mut membership: HashMap<&TaskId, &ColumnId> = HashMap::new();
        for (key, column) in &self.columns {
            if key != &column.id {
                return Err(KanbanError::integrity(format!(
                    "column stored under '{key}' has id '{}'",
                    column.id
                )));
            }
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    return Err(KanbanError::integrity(format!(
                        "column '{key}' references missing task '{task_id}'"
                    )));
                }
                if let Some(other) = membership.insert(task_id, key) {
                    return Err(KanbanError::integrity(format!(
                        "task '{task_id}' appears in both '{other}' and '{key}'"
                    )));
                }
            }
        }

        if let Some(orphan) = self.tasks.keys().find(|id| !membership.contains_key(id)) {
            return Err(KanbanError::integrity(format!(
                "task '{orphan}' is not in any column"
            )));
        }

        let mut seen = HashSet::new();
        for id in &self.column_order {
            if !self.columns.contains_key(id) {
                return Err(KanbanError::integrity(format!(
                    "column order names unknown column '{id}'"
                )));
            }
            if !seen.insert(id) {
                return Err(KanbanError::integrity(format!(
                    "column '{id}' appears twice in column order"
                )));
            }
        }
        if seen.len() != self.columns.len() {
            return Err(KanbanError::integrity(
                "column order is missing columns".to_string(),
            ));
        }

        Ok(())
    }
}
