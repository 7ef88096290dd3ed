//! Performance load: ten thousand locks that are each taken exactly
//! once and then abandoned, followed by two threads scanning half a
//! million heap cells. Times how a detector copes with a large universe
//! of dead locks and addresses. Excluded from the default batch.

use std::sync::Arc;

use caliper_sync::{Lock, ThreadSet};
use tracing::info;

const CELLS: usize = 500_000;
const LOCKS: usize = 10_000;

fn scan(items: &[Box<i32>]) {
    for item in items {
        assert_eq!(777, **item);
    }
}

pub fn run() {
    let stride = CELLS / LOCKS;
    let mut locks = Vec::with_capacity(LOCKS);
    let mut items = Vec::with_capacity(CELLS);
    for i in 0..CELLS {
        if i % stride == 0 {
            let lock = Lock::new(());
            drop(lock.lock());
            locks.push(lock);
        }
        items.push(Box::new(777));
    }

    let items = Arc::new(items);
    let mut threads = ThreadSet::new();
    for _ in 0..2 {
        let items = Arc::clone(&items);
        threads.spawn(move || scan(&items));
    }
    threads.join_all();
    info!(locks = locks.len(), cells = items.len(), "churn finished");
}
