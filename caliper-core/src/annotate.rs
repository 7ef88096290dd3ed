//! Ground-truth annotation channel between scenarios and a detector.
//!
//! Scenarios declare two kinds of facts. [`expect_race`] marks a memory
//! location on which the scenario intentionally races, identified by its
//! address. [`happens_before`]/[`happens_after`] describe a cross-thread
//! ordering edge the primitives cannot express on their own, identified
//! by a shared `u64` edge id.
//!
//! Everything funnels into one process-wide [`DetectorSink`]. When no
//! sink is installed the events are dropped, so scenarios run unchanged
//! whether or not a detector is attached.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

/// One fact reported to the detector under calibration.
///
/// A `HappensAfter { edge }` is only meaningful once some thread has
/// emitted `HappensBefore` with the same `edge`; pairing them is the
/// emitting scenario's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationEvent {
    /// The location at `addr` is part of an intentional race.
    ExpectRace { addr: usize },
    /// Everything the emitting thread did so far precedes whoever
    /// observes the matching `HappensAfter` on `edge`.
    HappensBefore { edge: u64 },
    /// The emitting thread observed the `HappensBefore` side of `edge`.
    HappensAfter { edge: u64 },
}

/// Consumer of annotation events, implemented by the detector adapter.
///
/// Called from arbitrary scenario threads, frequently while the emitting
/// thread holds a scenario lock. Implementations must not block on
/// scenario-owned primitives.
pub trait DetectorSink: Send + Sync {
    fn record(&self, event: AnnotationEvent);
}

/// Edge ids handed out by [`fresh_edge_id`] start here. Ids below the
/// base are free for scenarios that encode their own meaning into the
/// id value.
pub const EDGE_ID_BASE: u64 = 1 << 32;

static NEXT_EDGE_ID: AtomicU64 = AtomicU64::new(EDGE_ID_BASE);

static SINK: RwLock<Option<Arc<dyn DetectorSink>>> = RwLock::new(None);

/// A process-unique edge id for a new synchronization object.
pub fn fresh_edge_id() -> u64 {
    NEXT_EDGE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Install `sink` as the process-wide event consumer, replacing any
/// previous one.
pub fn install_sink(sink: Arc<dyn DetectorSink>) {
    *SINK.write() = Some(sink);
}

/// Remove the installed sink. Subsequent events are dropped.
pub fn clear_sink() {
    *SINK.write() = None;
}

/// The address under which a location is declared to the detector.
pub fn race_address<T>(target: &T) -> usize {
    target as *const T as usize
}

/// Declare that the location holding `target` is intentionally racy.
pub fn expect_race<T>(target: &T) {
    forward(AnnotationEvent::ExpectRace {
        addr: race_address(target),
    });
}

/// Emit the source half of ordering edge `edge`.
pub fn happens_before(edge: u64) {
    forward(AnnotationEvent::HappensBefore { edge });
}

/// Emit the sink half of ordering edge `edge`.
pub fn happens_after(edge: u64) {
    forward(AnnotationEvent::HappensAfter { edge });
}

fn forward(event: AnnotationEvent) {
    trace!(?event, "annotation emitted");
    if let Some(sink) = SINK.read().as_ref() {
        sink.record(event);
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    struct VecSink {
        events: Mutex<Vec<AnnotationEvent>>,
    }

    impl DetectorSink for VecSink {
        fn record(&self, event: AnnotationEvent) {
            self.events.lock().push(event);
        }
    }

    // The sink slot is process-global, so this is the only test in this
    // crate that touches it.
    #[test]
    fn events_reach_installed_sink_and_stop_after_clear() {
        let value = 7u32;

        // No sink installed: emitting must be a silent no-op.
        expect_race(&value);

        let sink = Arc::new(VecSink {
            events: Mutex::new(Vec::new()),
        });
        install_sink(sink.clone());

        let edge = fresh_edge_id();
        expect_race(&value);
        happens_before(edge);
        happens_after(edge);

        clear_sink();
        happens_before(edge);

        let events = sink.events.lock().clone();
        assert_eq!(
            events,
            vec![
                AnnotationEvent::ExpectRace {
                    addr: race_address(&value)
                },
                AnnotationEvent::HappensBefore { edge },
                AnnotationEvent::HappensAfter { edge },
            ]
        );
        assert!(edge >= EDGE_ID_BASE);
        assert_ne!(edge, fresh_edge_id());
    }
}
