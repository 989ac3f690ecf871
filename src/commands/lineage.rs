use primer::{Child, Lineage, Parent};

/// dad then son for each call, the way the calls were written out by hand.
pub fn lines() -> Vec<String> {
    let dad = Parent::new();
    let son = Child::new();
    let family: [&dyn Lineage; 2] = [&dad, &son];

    let mut lines = Vec::new();
    for member in family {
        lines.extend(member.implicit());
    }
    for member in family {
        lines.extend(member.overridden());
    }
    for member in family {
        lines.extend(member.altered());
    }
    lines
}
