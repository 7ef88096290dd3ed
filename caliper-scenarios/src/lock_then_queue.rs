//! The counter is touched under a lock on both sides, then once more by
//! the getter after the queue handoff. Correct, but the final increment
//! happens under no lock at all, so lockset detectors report it.

use std::sync::Arc;

use caliper_core::{annotate, RacyCell};
use caliper_sync::{BoundedQueue, Lock, ThreadSet};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    mu: Lock<()>,
    q: BoundedQueue<()>,
}

fn putter(ctx: &Ctx) {
    {
        let _guard = ctx.mu.lock();
        ctx.glob.update(|v| v + 1);
    }
    ctx.q.put(());
}

fn getter(ctx: &Ctx) {
    {
        let _guard = ctx.mu.lock();
        ctx.glob.update(|v| v + 1);
    }
    ctx.q.get();
    ctx.glob.update(|v| v + 1);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        mu: Lock::new(()),
        q: BoundedQueue::new(16),
    });
    annotate::expect_race(&ctx.glob);
    let mut threads = ThreadSet::new();
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || putter(&c));
    }
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || getter(&c));
    }
    threads.join_all();
    info!(glob = ctx.glob.read(), "three increments landed");
}
