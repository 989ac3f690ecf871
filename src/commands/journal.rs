use std::path::Path;

use anyhow::Result;
use primer::{Config, Journal, PrimerResult};

use super::Demo;
use crate::ui::context::UiContext;
use crate::ui::output::emit_demo;

/// Printed between the two reads.
const SPACER: &str = " ";

/// Read, append the configured line, then read again.
///
/// The first read fails with `FileNotFound` when the journal is missing,
/// before anything is written.
pub fn run(journal: &Journal, line: &str) -> PrimerResult<Vec<String>> {
    let mut lines = journal.read_lines()?;
    journal.append(line)?;
    lines.push(SPACER.to_string());
    lines.extend(journal.read_lines()?);
    Ok(lines)
}

pub fn cmd_journal(ui: &UiContext, config: &Config, file: Option<&Path>) -> Result<()> {
    let path = file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.journal.path.clone());
    let journal = Journal::new(path);

    tracing::info!(path = %journal.path().display(), "running journal demo");
    let lines = run(&journal, &config.journal.line)?;
    emit_demo(ui, Demo::Journal, &lines, false)?;
    Ok(())
}
