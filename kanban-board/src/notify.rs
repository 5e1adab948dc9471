//! User-facing notifications
//!
//! The board engine never notifies anyone itself; rejected operations come back
//! as errors. Front ends that want to surface them to a person implement
//! [`Notifier`].

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{error, info};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyKind {
    Info,
    Error,
}

/// Fire-and-forget message sink
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotifyKind);
}

/// Notifier that writes to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, kind: NotifyKind) {
        match kind {
            NotifyKind::Info => info!(target: "kanban::notify", "{message}"),
            NotifyKind::Error => error!(target: "kanban::notify", "{message}"),
        }
    }
}

/// Notifier that keeps every message, for tests and batch reporting
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(NotifyKind, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock leaves the vector intact.
    fn recorded(&self) -> MutexGuard<'_, Vec<(NotifyKind, String)>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything recorded so far, oldest first
    pub fn messages(&self) -> Vec<(NotifyKind, String)> {
        self.recorded().clone()
    }

    /// Number of recorded messages of `kind`
    pub fn count(&self, kind: NotifyKind) -> usize {
        self.messages()
            .iter()
            .filter(|(recorded, _)| *recorded == kind)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotifyKind) {
        self.recorded().push((kind, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify("column added", NotifyKind::Info);
        notifier.notify("task not found: task-9", NotifyKind::Error);

        assert_eq!(notifier.count(NotifyKind::Error), 1);
        assert_eq!(
            notifier.messages()[0],
            (NotifyKind::Info, "column added".to_string())
        );
    }

    #[test]
    fn test_recording_survives_poisoned_lock() {
        let notifier = RecordingNotifier::new();
        notifier.notify("before", NotifyKind::Info);

        let panicked = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = notifier.messages.lock().unwrap();
            panic!("listener crashed");
        }));
        assert!(panicked.is_err());
        assert!(notifier.messages.is_poisoned());

        notifier.notify("after", NotifyKind::Error);
        let messages = notifier.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], (NotifyKind::Error, "after".to_string()));
    }

    #[test]
    fn test_notifier_as_trait_object() {
        let sinks: Vec<Box<dyn Notifier>> =
            vec![Box::new(TracingNotifier), Box::new(RecordingNotifier::new())];
        for sink in &sinks {
            sink.notify("hello", NotifyKind::Info);
        }
    }
}
