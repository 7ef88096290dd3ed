//! Interleaving bias for scenarios.
//!
//! Several scenarios need one thread to reach a point "late" so that the
//! interesting interleaving happens on most runs. These helpers are
//! plain sleeps. They never publish writes and never order anything; a
//! detector that treats elapsed time as an ordering edge is exactly the
//! kind of unsoundness the false-negative scenarios are built to catch.

use std::time::Duration;

/// Park the calling thread for `amount` to bias the schedule.
pub fn bias(amount: Duration) {
    std::thread::sleep(amount);
}

/// Shorthand for [`bias`] with a millisecond count.
pub fn bias_ms(millis: u64) {
    bias(Duration::from_millis(millis));
}
