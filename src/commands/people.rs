use primer::PersonRegistry;

pub fn lines() -> Vec<String> {
    let mut registry = PersonRegistry::new();
    let _matz = registry.register("Yukihiro");
    let _dhh = registry.register("David");

    vec![format!("Number of Person instances: {}", registry.count())]
}
