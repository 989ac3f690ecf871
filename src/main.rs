//! primer CLI - console demos of records, traits and composition
//!
//! Usage: primer [DEMO]
//!
//! Demos:
//!   languages    Records with a description
//!   computer     Instance state, shared catalog, passed-in manufacturer
//!   people       A registry that counts what it builds
//!   inheritance  Inherited and overridden behaviour
//!   lineage      Implicit, overridden and base-delegating calls
//!   composition  Forwarding to a held delegate
//!   form         Prompted input with capitalize/upcase
//!   journal      Read a file, append a line, read again
//!   all          Every in-memory demo

use anyhow::Result;
use clap::Parser;

use primer::presentation::{Cli, Commands};
use primer::Config;

mod commands;
mod ui;

use commands::Demo;
use ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    primer::logging::init(cli.verbose);

    let cwd = std::env::current_dir()?;
    let loaded = Config::resolve(cli.config.as_deref(), &cwd)?;
    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "using config");
    }
    ui::output::print_config_warnings(&loaded.warnings);

    let config = loaded.config;
    let ui = UiContext::new(cli.json, cli.color, &config);

    match cli.command {
        None => commands::cmd_list(&ui),
        Some(Commands::Languages) => commands::cmd_demo(&ui, &config, Demo::Languages),
        Some(Commands::Computer) => commands::cmd_demo(&ui, &config, Demo::Computer),
        Some(Commands::People) => commands::cmd_demo(&ui, &config, Demo::People),
        Some(Commands::Inheritance) => commands::cmd_demo(&ui, &config, Demo::Inheritance),
        Some(Commands::Lineage) => commands::cmd_demo(&ui, &config, Demo::Lineage),
        Some(Commands::Composition) => commands::cmd_demo(&ui, &config, Demo::Composition),
        Some(Commands::Form) => commands::form::cmd_form(&ui),
        Some(Commands::Journal { file }) => {
            commands::journal::cmd_journal(&ui, &config, file.as_deref())
        }
        Some(Commands::All) => commands::cmd_all(&ui, &config),
    }
}
