//! Every access is under some lock, but the lock differs by phase: the
//! putters' first increments are under one lock, their second ones are
//! under both, and the getter's final increment is under the other.
//! The queue handoff makes it all ordered; the lock sets never
//! intersect across the handoff.

use std::sync::Arc;

use caliper_core::{annotate, RacyCell};
use caliper_sync::{BoundedQueue, Lock, ThreadSet};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    mu: Lock<()>,
    mu1: Lock<()>,
    q: BoundedQueue<()>,
}

fn putter(ctx: &Ctx) {
    {
        let _guard = ctx.mu.lock();
        ctx.glob.update(|v| v + 1);
    }
    ctx.q.put(());
    {
        let _outer = ctx.mu1.lock();
        let _inner = ctx.mu.lock();
        ctx.glob.update(|v| v + 1);
    }
}

fn getter(ctx: &Ctx) {
    ctx.q.get();
    ctx.q.get();
    {
        let _guard = ctx.mu1.lock();
        ctx.glob.update(|v| v + 1);
    }
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        mu: Lock::new(()),
        mu1: Lock::new(()),
        q: BoundedQueue::new(16),
    });
    annotate::expect_race(&ctx.glob);
    let mut threads = ThreadSet::new();
    for _ in 0..2 {
        let c = Arc::clone(&ctx);
        threads.spawn(move || putter(&c));
    }
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || getter(&c));
    }
    threads.join_all();
    info!(glob = ctx.glob.read(), "five increments landed");
}
