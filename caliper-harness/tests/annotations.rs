//! End-to-end checks that scenario declarations travel through the
//! process-global sink slot. Tests here share that slot, so they all
//! serialize on [`SINK_GATE`].

use std::sync::Arc;

use caliper_core::annotate::{self, EDGE_ID_BASE};
use caliper_core::{AnnotationEvent, DetectorSink};
use caliper_harness::{RecordingSink, TeeSink};
use caliper_scenarios::Registry;
use parking_lot::Mutex;

static SINK_GATE: Mutex<()> = Mutex::new(());

fn run_with_sink(sink: Arc<dyn DetectorSink>, index: usize) {
    let _gate = SINK_GATE.lock();
    let registry = Registry::standard();
    let entry = registry.get(index).expect("index inside the table").entry;
    annotate::install_sink(sink);
    entry();
    annotate::clear_sink();
}

#[test]
fn racy_scenario_declares_its_address() {
    let sink = Arc::new(RecordingSink::new());
    run_with_sink(sink.clone(), 1);

    let addresses = sink.expected_addresses();
    assert_eq!(addresses.len(), 1);
    assert_ne!(addresses[0], 0);
    assert_eq!(sink.events().len(), 1);
}

#[test]
fn predicate_handshake_emits_one_paired_edge() {
    let sink = Arc::new(RecordingSink::new());
    run_with_sink(sink.clone(), 3);

    let events = sink.events();
    let before: Vec<(usize, u64)> = events
        .iter()
        .enumerate()
        .filter_map(|(at, event)| match event {
            AnnotationEvent::HappensBefore { edge } => Some((at, *edge)),
            _ => None,
        })
        .collect();
    let after: Vec<(usize, u64)> = events
        .iter()
        .enumerate()
        .filter_map(|(at, event)| match event {
            AnnotationEvent::HappensAfter { edge } => Some((at, *edge)),
            _ => None,
        })
        .collect();

    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 1);
    assert_eq!(before[0].1, after[0].1);
    assert!(before[0].0 < after[0].0, "signal must precede the wakeup");
    // Primitive-owned edges come from the allocator, never the scenario range.
    assert!(before[0].1 >= EDGE_ID_BASE);
    assert!(sink.expected_addresses().is_empty());
}

#[test]
fn tee_wired_into_the_global_slot_feeds_every_branch() {
    let left = Arc::new(RecordingSink::new());
    let right = Arc::new(RecordingSink::new());
    let tee = Arc::new(TeeSink::new(vec![left.clone(), right.clone()]));
    run_with_sink(tee, 1);

    assert!(!left.events().is_empty());
    assert_eq!(left.events(), right.events());
}
