//! Two putters increment under a lock, signal over one shared queue and
//! re-read under the lock. The getter consumes both signals and checks
//! the total outside any lock. The queue orders the increments before
//! the check, but the check's lockset is empty.

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
    {
        let _guard = ctx.mu.lock();
        assert_ne!(ctx.glob.read(), 777);
    }
}

fn getter(ctx: &Ctx) {
    ctx.q.get();
    ctx.q.get();
    assert_eq!(ctx.glob.read(), 2);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        mu: Lock::new(()),
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
    info!(glob = ctx.glob.read(), "both signals consumed");
}
