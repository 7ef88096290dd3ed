use std::collections::HashSet;

use caliper_scenarios::{Registry, ScenarioTags};

#[test]
fn every_slot_has_a_distinct_name_and_entry_point() {
    let registry = Registry::standard();
    let names: HashSet<&str> = registry.iter().map(|d| d.name).collect();
    assert_eq!(names.len(), registry.len());
    let entries: HashSet<usize> = registry.iter().map(|d| d.entry as usize).collect();
    assert_eq!(entries.len(), registry.len());
}

// The sub-second feature scenarios, exercised directly. The slow ones
// and the excluded ones get their coverage from the harness suite.
#[test]
fn fast_feature_scenarios_run_clean() {
    caliper_core::logging::init_harness_logging();
    let registry = Registry::standard();
    for index in [1, 2, 4, 8, 12, 13, 14, 15, 16, 17, 23, 27, 28, 30, 31, 36, 38] {
        let descriptor = registry.get(index).expect("index in range");
        assert!(descriptor.tags.contains(ScenarioTags::FEATURE));
        (descriptor.entry)();
    }
}
