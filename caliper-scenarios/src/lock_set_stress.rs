//! Stability load for per-access lock sets: each round creates ten
//! fresh locks, and two workers walk the array taking, for cell `i`,
//! every lock whose bit is set in `i`, always in ascending order.
//! Detector state for retired locks gets churned hard. Excluded from
//! the default batch.

use std::sync::Arc;

use caliper_sync::{Lock, ThreadSet};
use tracing::{debug, info};

const ROUNDS: usize = 50;
const LOCKS: usize = 10;
const CELLS: usize = 1 << LOCKS;

fn worker(items: &[usize], locks: &[Lock<()>]) {
    for i in 0..items.len() {
        let mut held = Vec::new();
        for (j, lock) in locks.iter().enumerate() {
            if i & (1 << j) != 0 {
                held.push(lock.lock());
            }
        }
        assert_eq!(items[i], 0);
        drop(held);
    }
}

pub fn run() {
    let items = Arc::new(vec![0usize; CELLS]);
    for round in 0..ROUNDS {
        let locks = Arc::new((0..LOCKS).map(|_| Lock::new(())).collect::<Vec<_>>());
        let mut threads = ThreadSet::new();
        for _ in 0..2 {
            let items = Arc::clone(&items);
            let locks = Arc::clone(&locks);
            threads.spawn(move || worker(&items, &locks));
        }
        threads.join_all();
        debug!(round, "fresh lock set retired");
    }
    info!(rounds = ROUNDS, "lock set churn survived");
}
