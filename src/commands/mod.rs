//! One module per demo. Each builds its lines and hands them to the printer.

use anyhow::{anyhow, Result};
use primer::Config;

use crate::ui::context::UiContext;
use crate::ui::output::emit_demo;

pub mod composition;
pub mod computer;
pub mod form;
pub mod inheritance;
pub mod journal;
pub mod languages;
pub mod lineage;
pub mod people;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Languages,
    Computer,
    People,
    Inheritance,
    Lineage,
    Composition,
    Form,
    Journal,
}

impl Demo {
    /// Demos that run without input or side effects, in `all` order.
    pub const IN_MEMORY: [Demo; 6] = [
        Demo::Languages,
        Demo::Computer,
        Demo::People,
        Demo::Inheritance,
        Demo::Lineage,
        Demo::Composition,
    ];

    pub const ALL: [Demo; 8] = [
        Demo::Languages,
        Demo::Computer,
        Demo::People,
        Demo::Inheritance,
        Demo::Lineage,
        Demo::Composition,
        Demo::Form,
        Demo::Journal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Languages => "languages",
            Demo::Computer => "computer",
            Demo::People => "people",
            Demo::Inheritance => "inheritance",
            Demo::Lineage => "lineage",
            Demo::Composition => "composition",
            Demo::Form => "form",
            Demo::Journal => "journal",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Demo::Languages => "records with a description",
            Demo::Computer => "instance state, shared catalog, passed-in manufacturer",
            Demo::People => "a registry that counts what it builds",
            Demo::Inheritance => "inherited and overridden behaviour",
            Demo::Lineage => "implicit, overridden and base-delegating calls",
            Demo::Composition => "forwarding to a held delegate",
            Demo::Form => "prompted input with capitalize/upcase",
            Demo::Journal => "read a file, append a line, read again",
        }
    }

    /// Lines for the demos that need nothing but the config.
    pub fn lines(self, config: &Config) -> Option<Vec<String>> {
        match self {
            Demo::Languages => Some(languages::lines()),
            Demo::Computer => Some(computer::lines(config)),
            Demo::People => Some(people::lines()),
            Demo::Inheritance => Some(inheritance::lines()),
            Demo::Lineage => Some(lineage::lines()),
            Demo::Composition => Some(composition::lines()),
            Demo::Form | Demo::Journal => None,
        }
    }
}

fn in_memory_lines(demo: Demo, config: &Config) -> Result<Vec<String>> {
    demo.lines(config).ok_or_else(|| {
        anyhow!(
            "'{}' is not an in-memory demo; run 'primer {}' instead",
            demo.name(),
            demo.name()
        )
    })
}

/// Run a single in-memory demo. Form and journal have their own commands.
pub fn cmd_demo(ui: &UiContext, config: &Config, demo: Demo) -> Result<()> {
    let lines = in_memory_lines(demo, config)?;
    tracing::info!(demo = demo.name(), lines = lines.len(), "running demo");
    emit_demo(ui, demo, &lines, false)?;
    Ok(())
}

/// Run every in-memory demo, each under a heading.
pub fn cmd_all(ui: &UiContext, config: &Config) -> Result<()> {
    for (i, demo) in Demo::IN_MEMORY.into_iter().enumerate() {
        if i > 0 && !ui.json {
            println!();
        }
        let lines = in_memory_lines(demo, config)?;
        tracing::info!(demo = demo.name(), lines = lines.len(), "running demo");
        emit_demo(ui, demo, &lines, true)?;
    }
    Ok(())
}

/// Print the demo menu (no subcommand given).
pub fn cmd_list(ui: &UiContext) -> Result<()> {
    if ui.json {
        let demos: Vec<_> = Demo::ALL
            .iter()
            .map(|d| serde_json::json!({ "name": d.name(), "summary": d.summary() }))
            .collect();
        crate::ui::json::write_event(
            &mut std::io::stdout().lock(),
            &serde_json::json!({ "event": "demos", "demos": demos }),
        )?;
        return Ok(());
    }

    println!("primer v{}", env!("CARGO_PKG_VERSION"));
    println!("Available demos:\n");
    for demo in Demo::ALL {
        println!("  {:<12} {}", demo.name(), demo.summary());
    }
    println!("\nRun 'primer <demo>' to run one, or 'primer all' for the in-memory ones.");
    Ok(())
}
