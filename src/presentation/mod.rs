//! Presentation Layer
//!
//! CLI argument parsing (via clap). Rendering lives with the binary.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
