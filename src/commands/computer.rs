use primer::{Computer, Config, FileCatalog};

/// The manufacturer comes from the config handed in, never from ambient state.
pub fn lines(config: &Config) -> Vec<String> {
    let catalog = FileCatalog::stock();
    let hal = Computer::new("Dave");

    vec![
        format!("Current user: {}", hal.current_user()),
        format!("Manufacturer: {}", config.machine.manufacturer),
        format!("Files: {}", catalog),
    ]
}
