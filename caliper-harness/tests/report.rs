use std::sync::Arc;

use caliper_core::{AnnotationEvent, DetectorSink};
use caliper_harness::{
    read_reports_from_path, reconcile, write_reconciliation_to_path, RaceReport, Reconciliation,
    RecordingSink, ReportIoError, TeeSink,
};

fn report(addr: usize, description: &str) -> RaceReport {
    RaceReport {
        addr,
        description: description.to_string(),
    }
}

#[test]
fn reconcile_classifies_matched_missing_and_unexpected() {
    let declared = [
        AnnotationEvent::ExpectRace { addr: 0x1000 },
        AnnotationEvent::HappensBefore { edge: 42 },
        AnnotationEvent::ExpectRace { addr: 0x2000 },
        AnnotationEvent::HappensAfter { edge: 42 },
    ];
    let reported = [report(0x2000, "write vs write"), report(0x3000, "stray")];

    let outcome = reconcile(&declared, &reported);
    assert_eq!(outcome.matched, vec![0x2000]);
    assert_eq!(outcome.missing, vec![0x1000]);
    assert_eq!(outcome.unexpected, vec![report(0x3000, "stray")]);
    assert!(!outcome.is_clean());
}

#[test]
fn reconcile_counts_a_redeclared_address_once() {
    let declared = [
        AnnotationEvent::ExpectRace { addr: 0x1000 },
        AnnotationEvent::ExpectRace { addr: 0x1000 },
    ];
    let reported = [report(0x1000, "")];

    let outcome = reconcile(&declared, &reported);
    assert_eq!(outcome.matched, vec![0x1000]);
    assert!(outcome.missing.is_empty());
    assert!(outcome.is_clean());
}

#[test]
fn reconcile_is_clean_when_nothing_was_declared_or_reported() {
    let outcome = reconcile(&[], &[]);
    assert!(outcome.matched.is_empty());
    assert!(outcome.missing.is_empty());
    assert!(outcome.unexpected.is_empty());
    assert!(outcome.is_clean());
}

#[test]
fn recording_sink_keeps_events_in_arrival_order() {
    let sink = RecordingSink::new();
    sink.record(AnnotationEvent::HappensBefore { edge: 7 });
    sink.record(AnnotationEvent::ExpectRace { addr: 0x10 });
    sink.record(AnnotationEvent::ExpectRace { addr: 0x10 });
    sink.record(AnnotationEvent::ExpectRace { addr: 0x20 });

    assert_eq!(sink.events().len(), 4);
    assert_eq!(sink.expected_addresses(), vec![0x10, 0x20]);

    let drained = sink.take();
    assert_eq!(drained.len(), 4);
    assert!(sink.events().is_empty());
}

#[test]
fn tee_sink_fans_out_to_every_branch() {
    let left = Arc::new(RecordingSink::new());
    let right = Arc::new(RecordingSink::new());
    let tee = TeeSink::new(vec![left.clone(), right.clone()]);

    tee.record(AnnotationEvent::ExpectRace { addr: 0xbeef });

    assert_eq!(left.events(), vec![AnnotationEvent::ExpectRace { addr: 0xbeef }]);
    assert_eq!(right.events(), vec![AnnotationEvent::ExpectRace { addr: 0xbeef }]);
}

#[test]
fn reports_round_trip_through_json_files() {
    let dir = tempfile::tempdir().unwrap();
    let reports_path = dir.path().join("reports.json");
    let reports = vec![report(0x1000, "read vs write"), report(0x2000, "")];
    std::fs::write(&reports_path, serde_json::to_vec_pretty(&reports).unwrap()).unwrap();

    let read_back = read_reports_from_path(&reports_path).unwrap();
    assert_eq!(read_back, reports);

    let outcome = reconcile(&[AnnotationEvent::ExpectRace { addr: 0x1000 }], &read_back);
    let outcome_path = dir.path().join("reconciliation.json");
    write_reconciliation_to_path(&outcome_path, &outcome).unwrap();

    let parsed: Reconciliation =
        serde_json::from_slice(&std::fs::read(&outcome_path).unwrap()).unwrap();
    assert_eq!(parsed.matched, vec![0x1000]);
    assert!(parsed.missing.is_empty());
    assert_eq!(parsed.unexpected, vec![report(0x2000, "")]);
}

#[test]
fn description_is_optional_in_report_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bare.json");
    std::fs::write(&path, br#"[{"addr": 4096}]"#).unwrap();

    let reports = read_reports_from_path(&path).unwrap();
    assert_eq!(reports, vec![report(4096, "")]);
}

#[test]
fn unreadable_and_malformed_report_files_surface_as_errors() {
    let dir = tempfile::tempdir().unwrap();

    let err = read_reports_from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ReportIoError::Read(_)));

    let mangled = dir.path().join("mangled.json");
    std::fs::write(&mangled, b"not json at all").unwrap();
    let err = read_reports_from_path(&mangled).unwrap_err();
    assert!(matches!(err, ReportIoError::Json(_)));
}
