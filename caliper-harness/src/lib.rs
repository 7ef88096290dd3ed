//! Execution and bookkeeping around the scenario library: selecting
//! and running scenarios, capturing annotation events, and reconciling
//! a detector's findings against what the scenarios declared.

pub mod report;
pub mod runner;

pub use report::{
    reconcile, read_reports_from_path, write_reconciliation_to_path, RaceReport, Reconciliation,
    RecordingSink, ReportIoError, TeeSink,
};
pub use runner::{HarnessError, RunSummary, Runner, ScenarioRun, Selection};
