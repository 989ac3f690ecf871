use std::io;

use anyhow::Result;
use is_terminal::IsTerminal as _;
use primer::{FormAnswers, LinePrompter};

use super::Demo;
use crate::ui::context::UiContext;
use crate::ui::output::emit_demo;
use crate::ui::prompt::DialoguerPrompter;

/// Terminals get dialoguer prompts; piped input gets the plain questions.
/// In JSON mode the questions go to stderr so stdout stays NDJSON.
pub fn cmd_form(ui: &UiContext) -> Result<()> {
    let stdin = io::stdin();

    let answers = if stdin.is_terminal() && !ui.json {
        FormAnswers::collect(&mut DialoguerPrompter::default())?
    } else if ui.json {
        FormAnswers::collect(&mut LinePrompter::new(stdin.lock(), io::stderr()))?
    } else {
        FormAnswers::collect(&mut LinePrompter::new(stdin.lock(), io::stdout()))?
    };

    tracing::debug!(?answers, "form answered");
    emit_demo(ui, Demo::Form, &[answers.sentence()], false)?;
    Ok(())
}
