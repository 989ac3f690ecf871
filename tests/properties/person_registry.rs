//! Property tests for the person registry.

use proptest::prelude::*;

use primer::PersonRegistry;

proptest! {
    /// PROPERTY: the count equals the number of registrations, in order.
    #[test]
    fn property_count_matches_registrations(
        names in proptest::collection::vec("[A-Z][a-z]{0,10}", 0..=20),
    ) {
        let mut registry = PersonRegistry::new();
        let people: Vec<_> = names.iter().map(|n| registry.register(n.as_str())).collect();

        prop_assert_eq!(registry.count(), names.len());
        for (person, name) in people.iter().zip(&names) {
            prop_assert_eq!(person.name(), name.as_str());
        }
    }
}
