use primer::Language;

pub fn lines() -> Vec<String> {
    Language::classics()
        .iter()
        .map(Language::description)
        .collect()
}
