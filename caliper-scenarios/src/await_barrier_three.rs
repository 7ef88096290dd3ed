//! The three-thread variant of `await_barrier_two`.

use std::sync::Arc;

use caliper_core::{annotate, RacyCell};
use caliper_sync::{Lock, ThreadSet};
use tracing::info;

const WORKERS: i32 = 3;

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
    assert_eq!(ctx.glob.read(), WORKERS);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        mu: Lock::new(()),
        barrier: Lock::new(WORKERS),
    });
    annotate::expect_race(&ctx.glob);
    let mut threads = ThreadSet::new();
    for _ in 0..WORKERS {
        let c = Arc::clone(&ctx);
        threads.spawn(move || worker(&c));
    }
    threads.join_all();
    info!(glob = ctx.glob.read(), "barrier passed");
}
