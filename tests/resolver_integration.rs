//! Resolver property tests

use algoforge::catalog::Catalog;
use algoforge::core::config::EngineConfig;
use algoforge::engine::Resolver;
use proptest::prelude::*;

fn resolve(text: &str) -> (Option<String>, Option<String>) {
    let catalog = Catalog::standard();
    let resolver = Resolver::new(&catalog, &EngineConfig::default());
    let res = resolver.resolve(text);
    (res.family_id, res.operation)
}

#[test]
fn test_verbatim_keyword_selects_its_family() {
    // Keywords unique to one family must resolve to that family with the
    // keyword itself as the operation.
    // Chosen so no earlier keyword is a substring or near-miss of them.
    let unique = [
        ("dijkstra", "graphs"),
        ("huffman", "greedy"),
        ("fibonacci", "dynamic_programming"),
        ("pop", "stacks_queues"),
        ("dictionary", "hashing"),
    ];
    for (keyword, family) in unique {
        let (family_id, operation) = resolve(keyword);
        assert_eq!(family_id.as_deref(), Some(family), "keyword: {keyword}");
        assert_eq!(operation.as_deref(), Some(keyword));
    }
}

#[test]
fn test_two_family_input_resolves_to_higher_priority() {
    // arrays ("search") precedes graphs ("vertex"), in both word orders.
    let (family, _) = resolve("search for the vertex");
    assert_eq!(family.as_deref(), Some("arrays"));
    let (family, _) = resolve("vertex to search for");
    assert_eq!(family.as_deref(), Some("arrays"));
}

proptest! {
    /// Resolution never yields an operation without a family.
    #[test]
    fn prop_operation_implies_family(text in ".{0,60}") {
        let (family, operation) = resolve(&text);
        if operation.is_some() {
            prop_assert!(family.is_some());
        }
    }

    /// Resolution is a pure function of its input.
    #[test]
    fn prop_resolution_is_deterministic(text in ".{0,60}") {
        prop_assert_eq!(resolve(&text), resolve(&text));
    }

    /// Casing never changes the outcome.
    #[test]
    fn prop_case_insensitive(text in "[a-zA-Z ]{0,40}") {
        prop_assert_eq!(resolve(&text), resolve(&text.to_uppercase()));
    }

    /// Appending a unique high-priority keyword always wins over any text
    /// that previously resolved to a lower-priority family or to nothing.
    #[test]
    fn prop_prepended_arrays_keyword_wins(text in "[a-z ]{0,30}") {
        let (family, _) = resolve(&format!("array {text}"));
        prop_assert_eq!(family.as_deref(), Some("arrays"));
    }
}
