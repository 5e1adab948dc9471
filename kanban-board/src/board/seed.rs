//! Initial board datasets

use crate::types::{Board, Column, Task};
use serde::{Deserialize, Serialize};

/// Which dataset a new board starts from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedKind {
    /// Three columns with two tasks each
    #[default]
    Demo,
    /// No columns, no tasks
    Empty,
}

impl SeedKind {
    /// Build the board for this seed
    pub fn build(self) -> Board {
        match self {
            Self::Demo => demo_board(),
            Self::Empty => empty_board(),
        }
    }
}

const DEMO_TASKS: [(&str, &str, &str); 6] = [
    (
        "task-1",
        "Create design mockups",
        "Design the UI for the new feature",
    ),
    (
        "task-2",
        "Setup API endpoints",
        "Implement REST API for user authentication",
    ),
    (
        "task-3",
        "Write tests",
        "Create unit tests for core functionality",
    ),
    ("task-4", "Documentation", "Update README and API docs"),
    ("task-5", "Code review", "Review PRs from team members"),
    (
        "task-6",
        "Deploy to staging",
        "Prepare staging environment for testing",
    ),
];

const DEMO_COLUMNS: [(&str, &str, [&str; 2]); 3] = [
    ("column-1", "To Do", ["task-1", "task-2"]),
    ("column-2", "In Progress", ["task-3", "task-4"]),
    ("column-3", "Done", ["task-5", "task-6"]),
];

/// The demo board every session starts with by default
pub fn demo_board() -> Board {
    let mut board = Board::new();

    for (id, title, content) in DEMO_TASKS {
        board
            .tasks
            .insert(id.into(), Task::new(id, title).with_content(content));
    }

    for (id, title, task_ids) in DEMO_COLUMNS {
        board
            .columns
            .insert(id.into(), Column::new(id, title).with_tasks(task_ids));
        board.column_order.push(id.into());
    }

    board
}

/// A board with nothing on it
pub fn empty_board() -> Board {
    Board::new()
}
