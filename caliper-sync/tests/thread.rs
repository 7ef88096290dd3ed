use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use caliper_sync::{Thread, ThreadSet};
use parking_lot::Mutex;

#[test]
fn join_propagates_a_worker_panic() {
    let thread = Thread::spawn(|| panic!("worker failure"));
    let joined = std::panic::catch_unwind(AssertUnwindSafe(|| thread.join()));
    assert!(joined.is_err());
}

#[test]
fn join_publishes_the_workers_writes() {
    let value = Arc::new(AtomicUsize::new(0));
    let thread = {
        let value = Arc::clone(&value);
        Thread::spawn(move || value.store(11, Ordering::Relaxed))
    };
    thread.join();
    assert_eq!(value.load(Ordering::Relaxed), 11);
}

#[test]
fn thread_set_runs_every_worker() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut set = ThreadSet::new();
    for n in 0..3 {
        let seen = Arc::clone(&seen);
        set.spawn(move || seen.lock().push(n));
    }
    assert_eq!(set.len(), 3);
    set.join_all();
    let mut seen = seen.lock().clone();
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2]);
}
