//! primer - console demonstrations of basic program structure
//!
//! Records with a description, per-instance and registry-owned state, trait
//! specialization with explicit base-delegation, composition, plus two small
//! I/O demos: a journal file and a prompted form.

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod journal;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use config::{ColorMode, Config, ConfigWarning, LoadedConfig};
pub use domain::{
    Alarm, ApplicationError, Child, Composite, Computer, Creature, Dragon, FileCatalog, Fighter,
    Heir, Language, Lineage, Other, Parent, Person, PersonRegistry, SuperBadError,
};
pub use error::{PrimerError, PrimerResult};
pub use form::{capitalize, upcase, FormAnswers, LinePrompter, Prompter};
pub use journal::{split_records, Journal};
pub use presentation::{Cli, ColorWhen, Commands};
