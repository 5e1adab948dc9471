//! Scripted board sessions
//!
//! A script is a YAML or JSON list of steps. Each step is either a board
//! operation tagged by `op`, or a drag event tagged by `drag`:
//!
//! ```yaml
//! - op: add_column
//!   title: Blocked
//! - op: move_task
//!   id: task-1
//!   source: column-1
//!   destination: column-2
//!   hint: { before: task-4 }
//! - drag: start_column
//!   column: column-3
//!   index: 2
//! - drag: enter_column
//!   column: column-1
//! - drag: end
//! ```

use crate::column::{AddColumn, DeleteColumn, RenameColumn, ReorderColumns};
use crate::drag::{DragEvent, DragSession};
use crate::error::{KanbanError, Result};
use crate::operation::Operation;
use crate::processor::BoardStore;
use crate::task::{AddTask, DeleteTask, MoveTask, UpdateTask};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Any mutating board operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddColumn(AddColumn),
    AddTask(AddTask),
    DeleteColumn(DeleteColumn),
    DeleteTask(DeleteTask),
    MoveTask(MoveTask),
    ReorderColumns(ReorderColumns),
    RenameColumn(RenameColumn),
    UpdateTask(UpdateTask),
}

impl Command {
    fn operation(&self) -> &dyn Operation {
        match self {
            Self::AddColumn(op) => op,
            Self::AddTask(op) => op,
            Self::DeleteColumn(op) => op,
            Self::DeleteTask(op) => op,
            Self::MoveTask(op) => op,
            Self::ReorderColumns(op) => op,
            Self::RenameColumn(op) => op,
            Self::UpdateTask(op) => op,
        }
    }

    /// Canonical op string, e.g. "move task"
    pub fn op_string(&self) -> String {
        self.operation().op_string()
    }

    /// Run the command through `store`
    pub fn run(&self, store: &mut BoardStore) -> Result<()> {
        match self {
            Self::AddColumn(op) => store.process(op).map(drop),
            Self::AddTask(op) => store.process(op).map(drop),
            Self::DeleteColumn(op) => store.process(op).map(drop),
            Self::DeleteTask(op) => store.process(op).map(drop),
            Self::MoveTask(op) => store.process(op).map(drop),
            Self::ReorderColumns(op) => store.process(op).map(drop),
            Self::RenameColumn(op) => store.process(op).map(drop),
            Self::UpdateTask(op) => store.process(op).map(drop),
        }
    }
}

/// One line of a script
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Op(Command),
    Drag(DragEvent),
}

/// What a step did to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A mutation was applied; carries its op string
    Applied(String),
    /// The step changed no board state (a hover, or a drop with no target)
    Idle,
}

/// A step that failed, with the operation it ran as.
///
/// For a drag step `op` is the command the drop resolved to.
#[derive(Debug, Error)]
#[error("{op} failed: {error}")]
pub struct StepError {
    pub op: String,
    #[source]
    pub error: KanbanError,
}

impl StepError {
    pub fn is_rejection(&self) -> bool {
        self.error.is_rejection()
    }
}

impl BoardStore {
    /// Run one script step, driving `session` for drag events.
    ///
    /// An `Err` leaves the board unchanged.
    pub fn run_step(
        &mut self,
        session: &mut DragSession,
        step: &Step,
    ) -> std::result::Result<StepOutcome, StepError> {
        let (op, result) = match step {
            Step::Op(command) => (command.op_string(), command.run(self)),
            Step::Drag(event) => match session.handle(event.clone()) {
                Some(action) => (action.op_string(), self.apply_drop(&action)),
                None => return Ok(StepOutcome::Idle),
            },
        };
        match result {
            Ok(()) => Ok(StepOutcome::Applied(op)),
            Err(error) => Err(StepError { op, error }),
        }
    }
}

/// An ordered list of steps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a script file, JSON if the extension says so and YAML otherwise
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&text),
            _ => Self::from_yaml(&text),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::demo_board;
    use crate::types::{ColumnId, DropHint, TaskId};

    const SCRIPT: &str = r#"
- op: add_column
  title: Blocked
- op: move_task
  id: task-1
  source: column-1
  destination: column-2
  hint:
    before: task-4
- op: add_task
  column: column-9
  title: Lost
- drag: start_column
  column: column-3
  index: 2
- drag: enter_column
  column: column-1
- drag: end
"#;

    #[test]
    fn test_parse_steps() {
        let script = Script::from_yaml(SCRIPT).unwrap();
        assert_eq!(script.len(), 6);

        match &script.steps[1] {
            Step::Op(Command::MoveTask(op)) => {
                assert_eq!(op.hint, DropHint::Before(TaskId::from("task-4")));
            }
            other => panic!("unexpected step {other:?}"),
        }
        assert!(matches!(script.steps[5], Step::Drag(DragEvent::End)));
    }

    #[test]
    fn test_hint_defaults_to_append() {
        let script = Script::from_json(
            r#"[{"op": "reorder_columns", "id": "column-1"}]"#,
        )
        .unwrap();
        match &script.steps[0] {
            Step::Op(Command::ReorderColumns(op)) => assert_eq!(op.hint, DropHint::Append),
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn test_run_script() {
        let script = Script::from_yaml(SCRIPT).unwrap();
        let mut store = BoardStore::new(demo_board());
        let mut session = DragSession::new();

        let outcomes: Vec<_> = script
            .steps
            .iter()
            .map(|step| store.run_step(&mut session, step))
            .collect();

        assert_eq!(outcomes[0].as_ref().unwrap(), &StepOutcome::Applied("add column".into()));
        assert!(outcomes[2].as_ref().unwrap_err().is_rejection());
        assert_eq!(outcomes[4].as_ref().unwrap(), &StepOutcome::Idle);
        assert_eq!(
            outcomes[5].as_ref().unwrap(),
            &StepOutcome::Applied("reorder columns".into())
        );

        let board = store.board();
        let order: Vec<_> = board.column_order.iter().map(ColumnId::as_str).collect();
        assert_eq!(order, ["column-3", "column-1", "column-2", "column-4"]);
        board.check_integrity().unwrap();
    }

    #[test]
    fn test_rejected_drop_names_resolved_op() {
        let script = Script::from_yaml(
            r#"
- drag: start_task
  task: task-1
  column: column-1
- drag: enter_task
  task: task-4
  column: column-2
- op: delete_task
  id: task-4
- drag: end
"#,
        )
        .unwrap();
        let mut store = BoardStore::new(demo_board());
        let mut session = DragSession::new();

        let mut outcomes: Vec<_> = script
            .steps
            .iter()
            .map(|step| store.run_step(&mut session, step))
            .collect();

        let err = outcomes.pop().unwrap().unwrap_err();
        assert_eq!(err.op, "move task");
        assert!(err.is_rejection());
        assert!(matches!(err.error, KanbanError::DropTargetNotFound { .. }));
        assert!(!session.is_active());
        let to_do = &store.board().columns[&ColumnId::from("column-1")];
        assert_eq!(to_do.task_ids[0], TaskId::from("task-1"));
    }

    #[test]
    fn test_unknown_op_is_a_parse_error() {
        assert!(Script::from_yaml("- op: explode\n").is_err());
    }
}
