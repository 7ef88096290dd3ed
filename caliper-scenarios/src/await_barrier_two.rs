//! A two-thread barrier built from a countdown and `await_when`. Each
//! worker increments the cell under the lock, counts itself down and
//! waits for the counter to hit zero, then checks the total outside any
//! lock. The barrier orders everything; the bare final reads are what
//! lockset detectors trip over.

use std::sync::Arc;

use caliper_core::{annotate, RacyCell};
use caliper_sync::{Lock, ThreadSet};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    mu: Lock<()>,
    barrier: Lock<i32>,
}

fn worker(ctx: &Ctx) {
    {
        let _guard = ctx.mu.lock();
        ctx.glob.update(|v| v + 1);
    }
    let mut count = ctx.barrier.lock();
    *count -= 1;
    annotate::happens_before(ctx.barrier.edge_id());
    count.await_when(|c| *c == 0);
    drop(count);
    assert_eq!(ctx.glob.read(), 2);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        mu: Lock::new(()),
        barrier: Lock::new(2),
    });
    annotate::expect_race(&ctx.glob);
    let mut threads = ThreadSet::new();
    for _ in 0..2 {
        let c = Arc::clone(&ctx);
        threads.spawn(move || worker(&c));
    }
    threads.join_all();
    info!(glob = ctx.glob.read(), "barrier passed");
}
