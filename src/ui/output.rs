use std::io::{self, Write};

use crossterm::style::Stylize;
use primer::config::ConfigWarning;

use crate::commands::Demo;
use crate::ui::context::UiContext;
use crate::ui::json::write_event;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Print one demo's lines to stdout.
pub fn emit_demo(ui: &UiContext, demo: Demo, lines: &[String], heading: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_demo(&mut out, ui, demo, lines, heading)?;
    out.flush()
}

pub fn write_demo(
    out: &mut impl Write,
    ui: &UiContext,
    demo: Demo,
    lines: &[String],
    heading: bool,
) -> io::Result<()> {
    if ui.json {
        write_event(
            out,
            &serde_json::json!({ "event": "start", "demo": demo.name() }),
        )?;
        for line in lines {
            write_event(
                out,
                &serde_json::json!({ "event": "line", "demo": demo.name(), "text": line }),
            )?;
        }
        return write_event(
            out,
            &serde_json::json!({ "event": "complete", "demo": demo.name(), "lines": lines.len() }),
        );
    }

    if heading {
        let title = format!("== {} ==", demo.name());
        if ui.color {
            writeln!(out, "{}", title.bold().cyan())?;
        } else {
            writeln!(out, "{}", title)?;
        }
    }
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
