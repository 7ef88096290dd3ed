//! Stability load: fifty rounds of fifteen short-lived threads, each
//! picking a bit lane from a locked counter and scanning the matching
//! slice of a read-only array. Excluded from the default batch.

use std::sync::Arc;

use caliper_sync::{Lock, ThreadSet};
use tracing::{debug, info};

const ROUNDS: usize = 50;
const FANOUT: usize = 15;
const CELLS: usize = 1 << FANOUT;

struct Ctx {
    counter: Lock<usize>,
    items: Vec<usize>,
}

fn worker(ctx: &Ctx) {
    let lane = {
        let mut counter = ctx.counter.lock();
        *counter += 1;
        *counter
    } % FANOUT;
    for i in 0..CELLS {
        if i & (1 << lane) != 0 {
            assert_eq!(ctx.items[i], 0);
        }
    }
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        counter: Lock::new(0),
        items: vec![0; CELLS],
    });
    for round in 0..ROUNDS {
        let mut threads = ThreadSet::new();
        for _ in 0..FANOUT {
            let c = Arc::clone(&ctx);
            threads.spawn(move || worker(&c));
        }
        threads.join_all();
        debug!(round, "round joined");
    }
    info!(counter = *ctx.counter.lock(), "thread churn survived");
}
