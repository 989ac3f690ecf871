//! Composition: a `Composite` has an `Other` and forwards to it by hand
//!
//! Nothing is inherited here. Every call the composite exposes is written
//! out, either forwarding, replacing, or wrapping the delegate.

/// The helper a [`Composite`] holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Other;

impl Other {
    pub fn new() -> Self {
        Self
    }

    pub fn implicit(&self) -> String {
        "OTHER implicit()".to_string()
    }

    pub fn overridden(&self) -> String {
        "OTHER override()".to_string()
    }

    pub fn altered(&self) -> String {
        "OTHER altered()".to_string()
    }
}

/// Owns its delegate from construction onwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composite {
    other: Other,
}

impl Composite {
    pub fn new() -> Self {
        Self {
            other: Other::new(),
        }
    }

    /// Pure forward to the delegate.
    pub fn implicit(&self) -> Vec<String> {
        vec![self.other.implicit()]
    }

    /// Does not touch the delegate.
    pub fn overridden(&self) -> Vec<String> {
        vec!["CHILD override()".to_string()]
    }

    /// Delegate call wrapped in a before and after line.
    pub fn altered(&self) -> Vec<String> {
        vec![
            "CHILD, BEFORE OTHER altered()".to_string(),
            self.other.altered(),
            "CHILD, AFTER OTHER altered()".to_string(),
        ]
    }
}
