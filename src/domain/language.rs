//! Language record - an immutable name/creator pair

use std::fmt;

/// A programming language and the person who created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    name: String,
    creator: String,
}

impl Language {
    pub fn new(name: impl Into<String>, creator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creator: creator.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line self introduction.
    pub fn description(&self) -> String {
        format!("I'm {} and I was created by {}!", self.name, self.creator)
    }

    /// The three languages the `languages` demo introduces, in order.
    pub fn classics() -> Vec<Language> {
        vec![
            Language::new("Ruby", "Yukihiro Matsumoto"),
            Language::new("Python", "Guido van Rossum"),
            Language::new("JavaScript", "Brendan Eich"),
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
