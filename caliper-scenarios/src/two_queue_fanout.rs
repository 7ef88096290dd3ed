//! The widest queue scenario: two putters with private queues, two
//! getters consuming one signal from each queue, and increments spread
//! across two locks by phase. Fully ordered through the handoffs; the
//! phase-dependent lock sets are what get reported.

use std::sync::Arc;

use caliper_core::{annotate, delay, RacyCell};
use caliper_sync::{BoundedQueue, Lock, ThreadSet};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    mu1: Lock<()>,
    mu2: Lock<()>,
    q1: BoundedQueue<()>,
    q2: BoundedQueue<()>,
}

fn putter(ctx: &Ctx, q: &BoundedQueue<()>) {
    {
        let _guard = ctx.mu1.lock();
        ctx.glob.update(|v| v + 1);
    }
    q.put(());
    q.put(());
    {
        let _outer = ctx.mu1.lock();
        let _inner = ctx.mu2.lock();
        ctx.glob.update(|v| v + 1);
    }
}

fn getter(ctx: &Ctx) {
    ctx.q1.get();
    ctx.q2.get();
    {
        let _guard = ctx.mu2.lock();
        ctx.glob.update(|v| v + 1);
    }
    delay::bias_ms(50);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        mu1: Lock::new(()),
        mu2: Lock::new(()),
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
    info!(glob = ctx.glob.read(), "six increments landed");
}
