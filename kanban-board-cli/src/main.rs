//! kanban-board - drive an in-memory kanban board from the command line.
//!
//! Commands:
//! - `kanban-board show`: print the seeded board
//! - `kanban-board replay <script>`: apply a script of operations and drag steps
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error, or a rejected step under `--strict`

use std::io::{self, Write};

use clap::Parser;
use kanban_board::{Script, TracingNotifier};
use kanban_board_cli::replay::{self, load_config, render};
use kanban_board_cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    configure_logging(&cli);

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    };
    std::process::exit(exit_code);
}

/// Install the stderr subscriber; `--debug`/`--quiet` win over `RUST_LOG`.
fn configure_logging(cli: &Cli) {
    let filter = if cli.debug {
        EnvFilter::new("kanban_board=trace,kanban_board_cli=debug,kanban=debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Show { format } => {
            let view = replay::show(&config)?;
            write_stdout(&render(&view, format)?)?;
            Ok(0)
        }
        Commands::Replay {
            script,
            format,
            strict,
            activity,
        } => {
            let script = Script::load(&script)?;
            tracing::debug!(steps = script.len(), "loaded script");

            let report = replay::replay(&config, &script, &TracingNotifier, activity)?;
            write_stdout(&render(&report, format)?)?;

            if strict && !report.rejected.is_empty() {
                eprintln!("Error: {} step(s) rejected", report.rejected.len());
                return Ok(1);
            }
            Ok(0)
        }
    }
}

fn write_stdout(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
