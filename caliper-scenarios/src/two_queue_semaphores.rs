//! Two putters each read the cell, then signal over their own queue.
//! The getter consumes both signals before writing, so the write is
//! ordered after both reads. Detectors that do not model channel
//! handoffs report it.

use std::sync::Arc;

use caliper_core::{annotate, RacyCell};
use caliper_sync::{BoundedQueue, ThreadSet};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    q1: BoundedQueue<()>,
    q2: BoundedQueue<()>,
}

fn putter(ctx: &Ctx, q: &BoundedQueue<()>) {
    assert_ne!(ctx.glob.read(), 777);
    q.put(());
}

fn getter(ctx: &Ctx) {
    ctx.q1.get();
    ctx.q2.get();
    ctx.glob.update(|v| v + 1);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
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
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || getter(&c));
    }
    threads.join_all();
    info!(glob = ctx.glob.read(), "both signals consumed");
}
