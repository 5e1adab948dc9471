//! Drag-and-drop gesture tracking.
//!
//! A [`DragSession`] turns the event stream of one gesture (start, any number of
//! enters, then end or cancel) into at most one board mutation. Hovering only
//! records intent; nothing touches the board until the gesture ends, and the
//! session never touches the board itself. It hands back a [`DropAction`] for
//! the store to apply.

use crate::column::ReorderColumns;
use crate::operation::Operation;
use crate::task::MoveTask;
use crate::types::{ColumnId, DropHint, TaskId};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// What is being dragged, if anything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    DraggingTask {
        task: TaskId,
        source_column: ColumnId,
    },
    DraggingColumn {
        column: ColumnId,
        /// Position in the column order when the drag started
        source_index: usize,
    },
}

/// The current drop target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverTarget {
    /// Over a task card; the drop lands before it
    Task { task: TaskId, column: ColumnId },
    /// Over a column's body or header, not over any card
    Column { column: ColumnId },
}

impl HoverTarget {
    /// The column under the pointer
    pub fn column(&self) -> &ColumnId {
        match self {
            Self::Task { column, .. } | Self::Column { column } => column,
        }
    }

    /// The task under the pointer, if any
    pub fn task(&self) -> Option<&TaskId> {
        match self {
            Self::Task { task, .. } => Some(task),
            Self::Column { .. } => None,
        }
    }
}

/// Pointer events that drive a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "drag", rename_all = "snake_case")]
pub enum DragEvent {
    /// Drag started on a task card
    StartTask { task: TaskId, column: ColumnId },
    /// Drag started on a column header
    StartColumn { column: ColumnId, index: usize },
    /// Pointer entered a task card
    EnterTask { task: TaskId, column: ColumnId },
    /// Pointer entered a column outside any card
    EnterColumn { column: ColumnId },
    /// Drag ended or dropped; fires once per gesture wherever it is released
    End,
    /// Drag aborted by the input source or the view going away
    Cancel,
}

/// The single mutation a finished gesture resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropAction {
    MoveTask(MoveTask),
    ReorderColumns(ReorderColumns),
}

impl DropAction {
    /// Canonical op string of the wrapped command
    pub fn op_string(&self) -> String {
        match self {
            Self::MoveTask(op) => op.op_string(),
            Self::ReorderColumns(op) => op.op_string(),
        }
    }
}

/// Per-gesture drag state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    state: DragState,
    hover: Option<HoverTarget>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn hover(&self) -> Option<&HoverTarget> {
        self.hover.as_ref()
    }

    /// Whether a gesture is in progress
    pub fn is_active(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Feed one event; returns the drop action when the gesture resolves to one.
    pub fn handle(&mut self, event: DragEvent) -> Option<DropAction> {
        match event {
            DragEvent::StartTask { task, column } => {
                self.start_task(task, column);
                None
            }
            DragEvent::StartColumn { column, index } => {
                self.start_column(column, index);
                None
            }
            DragEvent::EnterTask { task, column } => {
                self.enter_task(task, column);
                None
            }
            DragEvent::EnterColumn { column } => {
                self.enter_column(column);
                None
            }
            DragEvent::End => self.end(),
            DragEvent::Cancel => {
                self.cancel();
                None
            }
        }
    }

    /// Begin dragging a task. Ignored while another gesture is active.
    pub fn start_task(&mut self, task: TaskId, source_column: ColumnId) {
        if self.is_active() {
            trace!(%task, "drag start ignored, gesture already active");
            return;
        }
        trace!(%task, column = %source_column, "drag task start");
        self.state = DragState::DraggingTask {
            task,
            source_column,
        };
        self.hover = None;
    }

    /// Begin dragging a column. Ignored while another gesture is active.
    pub fn start_column(&mut self, column: ColumnId, source_index: usize) {
        if self.is_active() {
            trace!(%column, "drag start ignored, gesture already active");
            return;
        }
        trace!(%column, source_index, "drag column start");
        self.state = DragState::DraggingColumn {
            column,
            source_index,
        };
        self.hover = None;
    }

    /// Pointer entered a task card.
    ///
    /// Only a task drag reacts, and never to the dragged task itself.
    pub fn enter_task(&mut self, task: TaskId, column: ColumnId) {
        if let DragState::DraggingTask { task: dragged, .. } = &self.state {
            if dragged != &task {
                trace!(%task, %column, "hover task");
                self.hover = Some(HoverTarget::Task { task, column });
            }
        }
    }

    /// Pointer entered a column outside any card.
    ///
    /// A task drag only reacts to columns other than its source, a column drag
    /// only to columns other than itself. A task-level hover already inside
    /// `column` wins over the column-level one.
    pub fn enter_column(&mut self, column: ColumnId) {
        let relevant = match &self.state {
            DragState::Idle => false,
            DragState::DraggingTask { source_column, .. } => source_column != &column,
            DragState::DraggingColumn { column: dragged, .. } => dragged != &column,
        };
        if !relevant {
            return;
        }
        if let Some(HoverTarget::Task { column: current, .. }) = &self.hover {
            if current == &column {
                return;
            }
        }
        trace!(%column, "hover column");
        self.hover = Some(HoverTarget::Column { column });
    }

    /// Finish the gesture and resolve it.
    ///
    /// The session is back to idle afterwards whatever the outcome.
    pub fn end(&mut self) -> Option<DropAction> {
        let state = std::mem::take(&mut self.state);
        let hover = self.hover.take()?;

        let action = match state {
            DragState::Idle => None,
            DragState::DraggingTask {
                task,
                source_column,
            } => {
                let destination = hover.column().clone();
                match hover.task() {
                    Some(target) => Some(DropAction::MoveTask(MoveTask::before(
                        task,
                        source_column,
                        destination,
                        target.clone(),
                    ))),
                    // Empty space in its own column: nothing to do
                    None if destination == source_column => None,
                    None => Some(DropAction::MoveTask(MoveTask::new(
                        task,
                        source_column,
                        destination,
                        DropHint::Append,
                    ))),
                }
            }
            DragState::DraggingColumn { column, .. } => {
                let target = hover.column();
                (target != &column).then(|| {
                    DropAction::ReorderColumns(ReorderColumns::before(column, target.clone()))
                })
            }
        };

        trace!(?action, "drag end");
        action
    }

    /// Abort the gesture without producing anything.
    pub fn cancel(&mut self) {
        if self.is_active() {
            trace!("drag cancelled");
        }
        self.state = DragState::Idle;
        self.hover = None;
    }
}
