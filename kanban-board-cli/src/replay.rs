//! Show and replay commands.

use std::path::Path;

use anyhow::{bail, Context};
use kanban_board::{
    board::{BoardView, GetBoard},
    BoardStore, DragSession, KanbanConfig, LogEntry, Notifier, NotifyKind, Script, StepOutcome,
};
use serde::Serialize;

use crate::cli::OutputFormat;

/// A step the board refused
#[derive(Debug, Clone, Serialize)]
pub struct Rejection {
    /// 1-based position in the script
    pub step: usize,
    pub error: String,
}

/// Everything a replay prints
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub board: BoardView,
    pub applied: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<Rejection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Vec<LogEntry>>,
}

/// Load configuration, failing if an explicitly named file is missing
pub fn load_config(path: Option<&Path>) -> anyhow::Result<KanbanConfig> {
    if let Some(path) = path {
        if !path.is_file() {
            bail!("config file not found: {}", path.display());
        }
    }
    KanbanConfig::load(path).context("failed to load configuration")
}

/// Build the seeded board and render it
pub fn show(config: &KanbanConfig) -> anyhow::Result<BoardView> {
    let mut store = BoardStore::from_config(config);
    Ok(store.process(&GetBoard)?)
}

/// Apply every step of `script` in order.
///
/// Rejected steps are reported through `notifier` and collected; they never
/// stop the replay. The board is checked for integrity at the end.
pub fn replay(
    config: &KanbanConfig,
    script: &Script,
    notifier: &dyn Notifier,
    with_activity: bool,
) -> anyhow::Result<ReplayReport> {
    let mut store = BoardStore::from_config(config);
    let mut session = DragSession::new();
    let mut applied = 0;
    let mut rejected = Vec::new();

    for (index, step) in script.steps.iter().enumerate() {
        let number = index + 1;
        match store.run_step(&mut session, step) {
            Ok(StepOutcome::Applied(op)) => {
                tracing::debug!(step = number, %op, "step applied");
                applied += 1;
            }
            Ok(StepOutcome::Idle) => {}
            Err(failed) if failed.is_rejection() => {
                notifier.notify(
                    &format!("step {number} ({}) rejected: {}", failed.op, failed.error),
                    NotifyKind::Error,
                );
                rejected.push(Rejection {
                    step: number,
                    error: failed.error.to_string(),
                });
            }
            Err(failed) => {
                return Err(failed.error)
                    .with_context(|| format!("step {number} ({}) failed", failed.op))
            }
        }
    }

    store
        .board()
        .check_integrity()
        .context("board is inconsistent after replay")?;

    notifier.notify(
        &format!(
            "replayed {} steps: {applied} applied, {} rejected",
            script.len(),
            rejected.len()
        ),
        NotifyKind::Info,
    );

    let board = store.process(&GetBoard)?;
    let activity = with_activity.then(|| store.activity().cloned().collect());

    Ok(ReplayReport {
        board,
        applied,
        rejected,
        activity,
    })
}

/// Serialize `value` in the requested format
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
        OutputFormat::Json => serde_json::to_string_pretty(value)? + "\n",
    })
}
