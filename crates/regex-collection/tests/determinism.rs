#![allow(missing_docs)]

use proptest::prelude::*;
use regex_collection::{PatternName, PatternRegistry, dns_hostname};
use strum::IntoEnumIterator;

fn observe(
    registry: &PatternRegistry,
    name: PatternName,
    text: &str,
) -> (bool, bool, Vec<(usize, usize)>, Option<Vec<Option<String>>>) {
    let m = registry.get(name);
    (
        m.is_match(text),
        m.is_full_match(text),
        m.find_iter(text).map(|s| (s.start(), s.end())).collect(),
        m.captures(text)
            .map(|caps| caps.iter().map(|g| g.map(|s| s.as_str().to_string())).collect()),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn repeated_calls_agree(text in "\\PC{0,64}") {
        let global = PatternRegistry::global();
        for name in PatternName::iter() {
            prop_assert_eq!(observe(global, name, &text), observe(global, name, &text));
        }
    }

    #[test]
    fn fresh_registry_agrees_with_global(text in "[ -~\\t\\n]{0,64}") {
        let fresh = PatternRegistry::new().unwrap();
        let global = PatternRegistry::global();
        for name in PatternName::iter() {
            prop_assert_eq!(observe(&fresh, name, &text), observe(global, name, &text));
        }
    }

    #[test]
    fn generated_hostnames_are_accepted(
        labels in prop::collection::vec("[a-z0-9]([a-z0-9-]{0,20}[a-z0-9])?", 1..4),
        tld in "[a-zA-Z]{2,6}",
    ) {
        let host = format!("{}.{}", labels.join("."), tld);
        prop_assert!(dns_hostname().is_full_match(&host), "{:?}", host);
    }

    #[test]
    fn hostnames_with_bad_characters_are_rejected(
        head in "[a-z]{1,8}",
        bad in "[_ !@#]",
        tail in "[a-z]{0,8}",
    ) {
        let host = format!("{head}{bad}{tail}.com");
        prop_assert!(!dns_hostname().is_match(&host), "{:?}", host);
    }
}
