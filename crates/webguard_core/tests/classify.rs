use std::sync::Once;

use webguard_core::{classify, digest, Comparison};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(guard_logging::initialize_for_tests);
}

#[test]
fn empty_store_classifies_as_bootstrap() {
    init_logging();
    let fp = digest("V1");
    assert_eq!(classify(None, &fp), Comparison::Bootstrap);
}

#[test]
fn matching_fingerprint_classifies_as_unchanged() {
    init_logging();
    let fp = digest("V1");
    assert_eq!(classify(Some(&fp), &fp), Comparison::Unchanged);
}

#[test]
fn differing_fingerprint_classifies_as_changed() {
    init_logging();
    let old = digest("V1");
    let new = digest("V2");
    assert_ne!(old, new);
    assert_eq!(classify(Some(&old), &new), Comparison::Changed);
}

#[test]
fn classify_is_idempotent() {
    init_logging();
    let old = digest("V1");
    let new = digest("V2");

    let first = classify(Some(&old), &new);
    let second = classify(Some(&old), &new);
    assert_eq!(first, second);

    let first = classify(Some(&old), &old);
    let second = classify(Some(&old), &old);
    assert_eq!(first, second);
}
