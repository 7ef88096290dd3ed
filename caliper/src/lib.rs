//! # Caliper - Race Detector Calibration Suite
//!
//! Caliper is a library of concurrent scenarios with known ground truth,
//! built to measure what a dynamic data-race detector reports against
//! what an ideal detector would report.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! caliper = "0.1"
//! ```
//!
//! ```no_run
//! use caliper::prelude::*;
//!
//! let runner = Runner::new(Registry::standard());
//! let summary = runner.run(Selection::DefaultBatch).unwrap();
//! println!("ran {} scenarios", summary.indices().len());
//! ```
//!
//! ## Crates
//!
//! - `core`: annotation channel, racy cells, delay biasing, logging setup
//! - `sync`: the synchronization vocabulary the scenarios are written in
//! - `scenarios`: the scenario library and its registry
//! - `harness`: runner, selection and detector-report reconciliation

pub use caliper_core as core;

pub use caliper_sync as sync;

pub use caliper_scenarios as scenarios;

pub use caliper_harness as harness;

// Convenience re-exports of commonly used items
pub mod prelude {
    //! Commonly used types and traits

    pub use caliper_core::{annotate, delay, AnnotationEvent, DetectorSink, RacyCell};

    pub use caliper_sync::{
        BoundedQueue, CondVar, Lock, LockGuard, SharedLock, SpinLock, Thread, ThreadSet,
        WorkerPool,
    };

    pub use caliper_scenarios::{Registry, ScenarioDescriptor, ScenarioTags, Verdict};

    pub use caliper_harness::{
        reconcile, RecordingSink, Runner, RunSummary, Selection, TeeSink,
    };
}
