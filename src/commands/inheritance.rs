use primer::{Alarm, Creature, Dragon, Fighter, SuperBadError};

pub fn lines() -> Vec<String> {
    let err = SuperBadError;
    let fighters: Vec<Box<dyn Fighter>> = vec![
        Box::new(Creature::new("Creature")),
        Box::new(Dragon::new("Dragon")),
    ];

    let mut lines = vec![err.display_error()];
    lines.extend(
        fighters
            .iter()
            .map(|f| format!("{}: {}", f.name(), f.fight())),
    );
    lines
}
