//! Person registry - the only way to construct a `Person`
//!
//! The instance count lives in the registry value instead of a static, so
//! two registries never see each other's people.

/// A named person created through a [`PersonRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Owns the count of people constructed so far.
#[derive(Debug, Default)]
pub struct PersonRegistry {
    count: usize,
}

impl PersonRegistry {
    /// Start a fresh registry with a count of zero.
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Construct a person and bump the count.
    pub fn register(&mut self, name: impl Into<String>) -> Person {
        self.count += 1;
        let person = Person { name: name.into() };
        tracing::trace!(name = %person.name, count = self.count, "registered person");
        person
    }

    /// Number of people constructed through this registry.
    pub fn count(&self) -> usize {
        self.count
    }
}
