//! Terminal output for the demos: plain lines, NDJSON events, prompts.

pub mod context;
pub mod json;
pub mod output;
pub mod prompt;
