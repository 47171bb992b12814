//! Interactive color session.
//!
//! Holds the session state (entry store plus sync-in-progress flag) and maps
//! line commands onto the core operations. All remote failures surface only
//! as outcome counts or an empty startup list, never as session errors.

use std::io::{self, BufRead, Write};

use swatch_core::remote::RemoteStore;
use swatch_core::sync::run_sync;
use swatch_core::util::{date_part, now_timestamp};
use swatch_core::{is_valid_hex, ColorStore, SyncOutcome};

use crate::error::CliError;

/// Session state owned by the loop
#[derive(Debug, Default)]
pub struct SessionState {
    pub store: ColorStore,
    pub syncing: bool,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// One parsed line command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a color by hex value
    Add(String),
    /// List all entries
    List,
    /// Show the pending badge count
    Pending,
    /// Run a sync pass
    Sync,
    /// Show command help
    Help,
    /// End the session
    Quit,
    /// Anything unrecognized
    Unknown(String),
}

/// Parse one input line; `None` for a blank line.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    Some(match word.to_ascii_lowercase().as_str() {
        "add" => Command::Add(rest.to_string()),
        "list" => Command::List,
        "pending" => Command::Pending,
        "sync" => Command::Sync,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    })
}

/// Apply one command to the session, returning the lines to print.
pub async fn handle_command<R: RemoteStore>(
    state: &mut SessionState,
    remote: &R,
    command: Command,
) -> Vec<String> {
    match command {
        Command::Add(hex) => {
            if is_valid_hex(&hex) {
                state.store.append(hex.clone(), now_timestamp());
                vec![format!("Added {}.", hex.to_uppercase())]
            } else {
                vec![format!("Invalid hex value: {hex}")]
            }
        }
        Command::List => render_list(&state.store),
        Command::Pending => vec![format!("Pending colors: {}", state.store.pending_count())],
        Command::Sync => {
            if state.syncing {
                return vec!["Sync already in progress.".to_string()];
            }
            state.syncing = true;
            let outcome = run_sync(remote, &mut state.store).await;
            state.syncing = false;
            vec![format_outcome(outcome)]
        }
        Command::Help => help_lines(),
        Command::Quit => Vec::new(),
        Command::Unknown(line) => {
            vec![format!("Unknown command: {line}. Type `help` for commands.")]
        }
    }
}

/// Grid-style rendering: uppercased hex, date portion of the timestamp,
/// and a sync marker.
fn render_list(store: &ColorStore) -> Vec<String> {
    if store.is_empty() {
        return vec!["No colors yet. Add one with `add #RRGGBB`.".to_string()];
    }

    store
        .all()
        .iter()
        .map(|entry| {
            let marker = if entry.synced { "synced" } else { "pending" };
            format!(
                "{:<8} {:<11} {marker}",
                entry.hex.to_uppercase(),
                date_part(&entry.created_at)
            )
        })
        .collect()
}

fn format_outcome(outcome: SyncOutcome) -> String {
    if outcome.dispatched() {
        format!(
            "Successfully synced {} colors. Failed: {}",
            outcome.synced_count, outcome.failed_count
        )
    } else {
        "No colors to sync.".to_string()
    }
}

fn help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  add <hex>   Add a color, e.g. add #FF0000".to_string(),
        "  list        Show all colors".to_string(),
        "  pending     Show the count of unsynced colors".to_string(),
        "  sync        Push unsynced colors to the remote store".to_string(),
        "  quit        End the session".to_string(),
    ]
}

/// Read commands from stdin until quit or EOF.
pub async fn run_loop<R: RemoteStore>(
    remote: &R,
    state: &mut SessionState,
) -> Result<(), CliError> {
    for line in help_lines() {
        println!("{line}");
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let Some(command) = parse_command(&line) else {
            continue;
        };
        if command == Command::Quit {
            break;
        }

        for output in handle_command(state, remote, command).await {
            println!("{output}");
        }
    }

    Ok(())
}
