//! Parent and child: implicit, overridden and altered behaviour
//!
//! Every operation on [`Lineage`] defaults to the parent's version. `Child`
//! keeps `implicit`, replaces `overridden`, and wraps `altered` around an
//! explicit call to the parent's version.

/// The parent's behaviour, callable from any override.
pub mod base {
    pub fn implicit() -> String {
        "PARENT implicit()".to_string()
    }

    pub fn overridden() -> String {
        "PARENT override()".to_string()
    }

    pub fn altered() -> String {
        "PARENT altered()".to_string()
    }
}

/// Operations shared by a parent and everything that specializes it.
/// Each returns the lines it prints.
pub trait Lineage {
    fn implicit(&self) -> Vec<String> {
        vec![base::implicit()]
    }

    fn overridden(&self) -> Vec<String> {
        vec![base::overridden()]
    }

    fn altered(&self) -> Vec<String> {
        vec![base::altered()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parent;

impl Parent {
    pub fn new() -> Self {
        Self
    }
}

impl Lineage for Parent {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Child;

impl Child {
    pub fn new() -> Self {
        Self
    }
}

impl Lineage for Child {
    fn overridden(&self) -> Vec<String> {
        vec!["CHILD override()".to_string()]
    }

    fn altered(&self) -> Vec<String> {
        vec![
            "CHILD, BEFORE PARENT altered()".to_string(),
            base::altered(),
            "CHILD, AFTER PARENT altered()".to_string(),
        ]
    }
}

/// A child that sets up its own state, then finishes construction through
/// the parent's constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heir {
    stuff: String,
    parent: Parent,
}

impl Heir {
    pub fn new(stuff: impl Into<String>) -> Self {
        let stuff = stuff.into();
        Self {
            stuff,
            parent: Parent::new(),
        }
    }

    pub fn stuff(&self) -> &str {
        &self.stuff
    }

    pub fn parent(&self) -> &Parent {
        &self.parent
    }
}

impl Lineage for Heir {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implicit_is_inherited() {
        assert_eq!(Parent::new().implicit(), ["PARENT implicit()"]);
        assert_eq!(Child::new().implicit(), Parent::new().implicit());
    }

    #[test]
    fn override_replaces_parent() {
        assert_eq!(Parent::new().overridden(), ["PARENT override()"]);
        assert_eq!(Child::new().overridden(), ["CHILD override()"]);
    }

    #[test]
    fn altered_wraps_parent_in_order() {
        assert_eq!(Parent::new().altered(), ["PARENT altered()"]);
        assert_eq!(
            Child::new().altered(),
            [
                "CHILD, BEFORE PARENT altered()",
                "PARENT altered()",
                "CHILD, AFTER PARENT altered()",
            ]
        );
    }

    #[test]
    fn dispatch_through_trait_objects() {
        let family: Vec<Box<dyn Lineage>> = vec![Box::new(Parent::new()), Box::new(Child::new())];
        let lines: Vec<String> = family.iter().flat_map(|m| m.overridden()).collect();
        assert_eq!(lines, ["PARENT override()", "CHILD override()"]);
    }

    #[test]
    fn heir_keeps_stuff_and_parent_behaviour() {
        let heir = Heir::new("heirloom");
        assert_eq!(heir.stuff(), "heirloom");
        assert_eq!(heir.parent(), &Parent::new());
        assert_eq!(heir.altered(), ["PARENT altered()"]);
    }
}
