//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// primer - small console demos of records, traits and composition
#[derive(Parser, Debug)]
#[command(name = "primer")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'primer' without arguments to list the demos.")]
pub struct Cli {
    /// Emit NDJSON events instead of plain lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./primer.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Introduce three languages and their creators
    Languages,

    /// Show a computer's user, its manufacturer and its stock files
    Computer,

    /// Count people created through a registry
    People,

    /// Inherited and overridden behaviour (alarms, creatures, dragons)
    Inheritance,

    /// Parent/child: implicit, overridden and altered calls
    Lineage,

    /// The same calls done through a held delegate
    Composition,

    /// Ask four questions and print a sentence
    Form,

    /// Read a text file, append a line, read it again
    Journal {
        /// Journal file (defaults to read_and_write.txt)
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Run every in-memory demo in order
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["primer"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_journal_file() {
        let cli = Cli::try_parse_from(["primer", "journal", "--file", "notes.txt"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Journal {
                file: Some(PathBuf::from("notes.txt"))
            })
        );
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["primer", "languages", "--json", "-vv", "--color", "never"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Languages));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }

    #[test]
    fn test_cli_rejects_unknown_demo() {
        assert!(Cli::try_parse_from(["primer", "metaprogramming"]).is_err());
    }
}
