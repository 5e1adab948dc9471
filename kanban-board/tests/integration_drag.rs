//! Drag gestures replayed against the demo board

use kanban_board::{
    board::demo_board, BoardStore, ColumnId, DragEvent, DragSession, DragState, TaskId,
};

struct Harness {
    store: BoardStore,
    session: DragSession,
}

impl Harness {
    fn new() -> Self {
        Self {
            store: BoardStore::new(demo_board()),
            session: DragSession::new(),
        }
    }

    /// Send events in order, returning how many drops were applied
    fn send(&mut self, events: impl IntoIterator<Item = DragEvent>) -> usize {
        let mut applied = 0;
        for event in events {
            if let Some(result) = self.store.dispatch_drag(&mut self.session, event) {
                result.unwrap();
                applied += 1;
            }
        }
        applied
    }

    fn tasks_in(&self, column: &str) -> Vec<&str> {
        self.store
            .board()
            .find_column(&column.into())
            .unwrap()
            .task_ids
            .iter()
            .map(TaskId::as_str)
            .collect()
    }

    fn order(&self) -> Vec<&str> {
        self.store
            .board()
            .column_order
            .iter()
            .map(ColumnId::as_str)
            .collect()
    }
}

fn start_task(task: &str, column: &str) -> DragEvent {
    DragEvent::StartTask {
        task: task.into(),
        column: column.into(),
    }
}

fn enter_task(task: &str, column: &str) -> DragEvent {
    DragEvent::EnterTask {
        task: task.into(),
        column: column.into(),
    }
}

fn enter_column(column: &str) -> DragEvent {
    DragEvent::EnterColumn {
        column: column.into(),
    }
}

#[test]
fn drop_on_task_in_other_column_inserts_before_it() {
    let mut h = Harness::new();
    let applied = h.send([
        start_task("task-1", "column-1"),
        enter_column("column-3"),
        enter_task("task-6", "column-3"),
        // pointer lands on the column body around the same card
        enter_column("column-3"),
        DragEvent::End,
    ]);

    assert_eq!(applied, 1);
    assert_eq!(h.tasks_in("column-1"), ["task-2"]);
    assert_eq!(h.tasks_in("column-3"), ["task-5", "task-1", "task-6"]);
    assert_eq!(h.session.state(), &DragState::Idle);
}

#[test]
fn reorder_within_column_moves_up() {
    let mut h = Harness::new();
    h.send([
        start_task("task-4", "column-2"),
        enter_task("task-3", "column-2"),
        DragEvent::End,
    ]);
    assert_eq!(h.tasks_in("column-2"), ["task-4", "task-3"]);
}

#[test]
fn dropping_before_next_neighbour_keeps_order() {
    let mut h = Harness::new();
    let before = h.store.board().clone();

    let applied = h.send([
        start_task("task-1", "column-1"),
        enter_task("task-2", "column-1"),
        DragEvent::End,
    ]);

    // the move runs but lands where it started
    assert_eq!(applied, 1);
    assert_eq!(h.store.board(), &before);
}

#[test]
fn column_drag_moves_column_before_target() {
    let mut h = Harness::new();
    h.send([
        DragEvent::StartColumn {
            column: "column-3".into(),
            index: 2,
        },
        enter_column("column-2"),
        DragEvent::End,
    ]);
    assert_eq!(h.order(), ["column-1", "column-3", "column-2"]);
}

#[test]
fn cancelled_and_untargeted_gestures_change_nothing() {
    let mut h = Harness::new();
    let before = h.store.board().clone();

    let applied = h.send([
        start_task("task-2", "column-1"),
        enter_column("column-2"),
        enter_task("task-4", "column-2"),
        DragEvent::Cancel,
        DragEvent::End,
        start_task("task-2", "column-1"),
        enter_task("task-2", "column-1"),
        DragEvent::End,
        start_task("task-2", "column-1"),
        enter_column("column-1"),
        DragEvent::End,
        DragEvent::StartColumn {
            column: "column-1".into(),
            index: 0,
        },
        enter_column("column-1"),
        DragEvent::End,
    ]);

    assert_eq!(applied, 0);
    assert_eq!(h.store.board(), &before);
    assert_eq!(h.store.activity_len(), 0);
}

#[test]
fn stale_drop_is_rejected_without_damage() {
    let mut h = Harness::new();
    h.send([start_task("task-3", "column-2"), enter_column("column-1")]);

    // The target column disappears mid-gesture
    h.store.delete_column("column-1").unwrap();
    let result = h
        .store
        .dispatch_drag(&mut h.session, DragEvent::End)
        .unwrap();

    assert!(result.unwrap_err().is_rejection());
    assert_eq!(h.tasks_in("column-2"), ["task-3", "task-4"]);
    assert!(!h.session.is_active());
    h.store.board().check_integrity().unwrap();
}

#[test]
fn one_drop_per_gesture() {
    let mut h = Harness::new();
    let applied = h.send([
        start_task("task-5", "column-3"),
        enter_column("column-1"),
        DragEvent::End,
        DragEvent::End,
        enter_column("column-2"),
        DragEvent::End,
    ]);

    assert_eq!(applied, 1);
    assert_eq!(h.tasks_in("column-1"), ["task-1", "task-2", "task-5"]);
    assert_eq!(h.store.activity().count(), 1);
}
