//! folio entry point.
//!
//! Runs the portfolio terminal over stdin/stdout. Each line read is submitted
//! as if typed; history entries added since the last line are printed as
//! plain text. `clear` prints the banner again. End of input quits.

mod demo;
mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use folio_content::ContentTree;
use folio_terminal::{EntryKind, Terminal};
use folio_types::config::TerminalConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config from CLI arg, FOLIO_CONFIG env var, or built-in defaults.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from);
    let config = match &config_path {
        Some(path) => TerminalConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TerminalConfig::default(),
    };
    log::info!("Starting folio (recall capacity {})", config.recall_capacity);

    let content = load_content(&config);
    let mut terminal = Terminal::new(&config, &content);
    log::info!("{} commands available", terminal.registry().len());

    let stdin = io::stdin();
    // A tty already shows what was typed; piped input gets echoed.
    let echo_input = !stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    let mut next_id = flush_history(&terminal, 0, echo_input, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        terminal.submit_line(&line);
        next_id = flush_history(&terminal, next_id, echo_input, &mut stdout)?;
    }

    log::info!("folio shutdown complete");
    Ok(())
}

/// Load content from the configured directory, falling back to the demo
/// portfolio when it is missing or unreadable.
fn load_content(config: &TerminalConfig) -> ContentTree {
    match ContentTree::from_directory(&config.content_dir) {
        Ok(tree) if !tree.is_empty() => tree,
        Ok(_) => {
            log::warn!(
                "No commands under {}, using demo content",
                config.content_dir.display()
            );
            demo::demo_content()
        },
        Err(e) => {
            log::warn!("Content unavailable ({e}), using demo content");
            demo::demo_content()
        },
    }
}

/// Print entries with id >= `next_id`, then the prompt. Returns the id to
/// resume from.
fn flush_history(
    terminal: &Terminal,
    next_id: u64,
    echo_input: bool,
    out: &mut impl Write,
) -> Result<u64> {
    let mut resume = next_id;
    for entry in terminal.history().iter().filter(|e| e.id >= next_id) {
        resume = entry.id + 1;
        if entry.kind == EntryKind::Input && !echo_input {
            continue;
        }
        writeln!(out, "{}", render::entry_line(entry, terminal.prompt()))?;
    }
    write!(out, "{} ", terminal.prompt())?;
    out.flush()?;
    Ok(resume)
}
