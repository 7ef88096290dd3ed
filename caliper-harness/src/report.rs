//! Annotation capture and detector report reconciliation.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use caliper_core::annotate::{AnnotationEvent, DetectorSink};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sink that keeps every annotation event for later inspection.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AnnotationEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<AnnotationEvent> {
        self.events.lock().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<AnnotationEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Addresses declared racy so far, first occurrence order, no
    /// duplicates.
    pub fn expected_addresses(&self) -> Vec<usize> {
        let mut seen = Vec::new();
        for event in self.events.lock().iter() {
            if let AnnotationEvent::ExpectRace { addr } = event {
                if !seen.contains(addr) {
                    seen.push(*addr);
                }
            }
        }
        seen
    }
}

impl DetectorSink for RecordingSink {
    fn record(&self, event: AnnotationEvent) {
        self.events.lock().push(event);
    }
}

/// Fans every annotation event out to several sinks, in order.
pub struct TeeSink {
    sinks: Vec<Arc<dyn DetectorSink>>,
}

impl TeeSink {
    pub fn new(sinks: Vec<Arc<dyn DetectorSink>>) -> Self {
        Self { sinks }
    }
}

impl DetectorSink for TeeSink {
    fn record(&self, event: AnnotationEvent) {
        for sink in &self.sinks {
            sink.record(event);
        }
    }
}

/// One race finding from the detector under calibration, keyed by the
/// address it reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceReport {
    pub addr: usize,
    #[serde(default)]
    pub description: String,
}

/// Outcome of pairing declared expectations with detector findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Declared and reported.
    pub matched: Vec<usize>,
    /// Declared but never reported. For a true positive this is a
    /// detector miss; for a declared false positive it means the
    /// detector has outgrown that blind spot.
    pub missing: Vec<usize>,
    /// Reported but never declared.
    pub unexpected: Vec<RaceReport>,
}

impl Reconciliation {
    /// Whether the detector behaved exactly as the suite predicted.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Pair the `ExpectRace` declarations from `events` against `reports`.
///
/// Matching is by address only. Declared addresses keep their first
/// occurrence order; duplicate declarations collapse.
pub fn reconcile(events: &[AnnotationEvent], reports: &[RaceReport]) -> Reconciliation {
    let mut declared: Vec<usize> = Vec::new();
    for event in events {
        if let AnnotationEvent::ExpectRace { addr } = event {
            if !declared.contains(addr) {
                declared.push(*addr);
            }
        }
    }

    let mut out = Reconciliation::default();
    for addr in &declared {
        if reports.iter().any(|report| report.addr == *addr) {
            out.matched.push(*addr);
        } else {
            out.missing.push(*addr);
        }
    }
    for report in reports {
        if !declared.contains(&report.addr) {
            out.unexpected.push(report.clone());
        }
    }
    out
}

#[derive(Debug, Error)]
pub enum ReportIoError {
    #[error("failed reading report file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed encoding or decoding json reports: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed writing reconciliation: {0}")]
    Write(#[source] std::io::Error),
}

/// Load detector findings from a JSON array file.
pub fn read_reports_from_path(path: impl AsRef<Path>) -> Result<Vec<RaceReport>, ReportIoError> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Write a reconciliation as pretty JSON for offline comparison.
pub fn write_reconciliation_to_path(
    path: impl AsRef<Path>,
    reconciliation: &Reconciliation,
) -> Result<(), ReportIoError> {
    let bytes = serde_json::to_vec_pretty(reconciliation)?;
    fs::write(path, bytes).map_err(ReportIoError::Write)
}
