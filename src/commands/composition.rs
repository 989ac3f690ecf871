use primer::Composite;

pub fn lines() -> Vec<String> {
    let son = Composite::new();

    let mut lines = son.implicit();
    lines.extend(son.overridden());
    lines.extend(son.altered());
    lines
}
