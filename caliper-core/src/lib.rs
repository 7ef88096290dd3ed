//! Shared substrate for the caliper race-detection harness.
//!
//! The harness exercises a dynamic race detector with scenarios whose
//! verdict (true or false, positive or negative) is known up front. This
//! crate holds the pieces every layer above depends on:
//!
//! - [`annotate`]: the channel through which scenarios tell the detector
//!   what to expect and which cross-thread orderings exist.
//! - [`cell`]: [`cell::RacyCell`], deliberately unsynchronized shared
//!   storage for the memory locations scenarios race on.
//! - [`delay`]: plain sleeps used to bias interleavings, explicitly not
//!   a synchronization mechanism.
//! - [`logging`]: `tracing` setup shared by the binary and the tests.

pub mod annotate;
pub mod cell;
pub mod delay;
pub mod logging;

pub use annotate::{AnnotationEvent, DetectorSink};
pub use cell::RacyCell;
