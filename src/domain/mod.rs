//! Domain Layer
//!
//! The object model behind the demos. Nothing here touches stdout or the
//! file system; operations return the lines a demo prints.
//!
//! ## Structure
//!
//! - `language` - immutable records with a description
//! - `computer` - per-instance state plus a shared file catalog
//! - `person` - a registry that owns the construction counter
//! - `creature`, `alarm` - trait specialization and overriding
//! - `lineage` - implicit, overridden and base-delegating operations
//! - `composition` - the same operations done through a held delegate

pub mod alarm;
pub mod composition;
pub mod computer;
pub mod creature;
pub mod language;
pub mod lineage;
pub mod person;

pub use alarm::{Alarm, ApplicationError, SuperBadError};
pub use composition::{Composite, Other};
pub use computer::{Computer, FileCatalog};
pub use creature::{Creature, Dragon, Fighter};
pub use language::Language;
pub use lineage::{Child, Heir, Lineage, Parent};
pub use person::{Person, PersonRegistry};
