//! Creatures and their fighting moves
//!
//! `Fighter::fight` has a default move; a `Dragon` replaces it with its own.

/// The move every fighter falls back on.
pub const BASE_MOVE: &str = "Punch to the chops!";

/// The dragon's replacement move.
pub const DRAGON_MOVE: &str = "Breathes fire!";

/// Something with a name that can fight.
pub trait Fighter {
    fn name(&self) -> &str;

    fn fight(&self) -> String {
        BASE_MOVE.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    name: String,
}

impl Creature {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Fighter for Creature {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A creature specialization with no extra state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dragon {
    name: String,
}

impl Dragon {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Fighter for Dragon {
    fn name(&self) -> &str {
        &self.name
    }

    fn fight(&self) -> String {
        DRAGON_MOVE.to_string()
    }
}
