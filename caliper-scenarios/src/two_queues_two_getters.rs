//! The fan-out variant of `queue_then_lock_reread`: each putter owns a
//! queue and signals twice, and each of two getters consumes one signal
//! from each queue before checking the total outside any lock.

use std::sync::Arc;

use caliper_core::{annotate, delay, RacyCell};
use caliper_sync::{BoundedQueue, Lock, ThreadSet};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    mu: Lock<()>,
    q1: BoundedQueue<()>,
    q2: BoundedQueue<()>,
}

fn putter(ctx: &Ctx, q: &BoundedQueue<()>) {
    {
        let _guard = ctx.mu.lock();
        ctx.glob.update(|v| v + 1);
    }
    q.put(());
    q.put(());
    {
        let _guard = ctx.mu.lock();
        assert_ne!(ctx.glob.read(), 777);
    }
}

fn getter(ctx: &Ctx) {
    ctx.q1.get();
    ctx.q2.get();
    assert_eq!(ctx.glob.read(), 2);
    delay::bias_ms(50);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        mu: Lock::new(()),
        q1: BoundedQueue::new(16),
        q2: BoundedQueue::new(16),
    });
    annotate::expect_race(&ctx.glob);
    let mut threads = ThreadSet::new();
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || putter(&c, &c.q1));
    }
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || putter(&c, &c.q2));
    }
    for _ in 0..2 {
        let c = Arc::clone(&ctx);
        threads.spawn(move || getter(&c));
    }
    threads.join_all();
    info!(glob = ctx.glob.read(), "both getters checked in");
}
