//! Computer - per-instance credentials plus a catalog shared by every machine

use std::collections::BTreeMap;
use std::fmt;

/// Files every computer ships with.
///
/// The catalog belongs to the type rather than to one machine, so it is a
/// separate value the caller builds once and hands around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCatalog {
    files: BTreeMap<String, String>,
}

impl FileCatalog {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }

    /// The stock catalog: a single `hello` file.
    pub fn stock() -> Self {
        let mut catalog = Self::new();
        catalog.insert("hello", "Hello, world!");
        catalog
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.files.insert(name.into(), content.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

impl Default for FileCatalog {
    fn default() -> Self {
        Self::stock()
    }
}

/// Renders as `{hello: "Hello, world!"}`.
impl fmt::Display for FileCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, content)) in self.files.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:?}", name, content)?;
        }
        f.write_str("}")
    }
}

/// A machine with a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    username: String,
}

impl Computer {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn current_user(&self) -> &str {
        &self.username
    }
}
