//! A put/get pair on a FIFO orders a write before a write. The queue
//! emits no annotations, so only a detector that models channel
//! handoffs will see the edge.

use std::sync::Arc;

use caliper_core::RacyCell;
use caliper_sync::{BoundedQueue, ThreadSet};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    q: BoundedQueue<()>,
}

fn putter(ctx: &Ctx) {
    ctx.glob.write(1);
    ctx.q.put(());
}

fn getter(ctx: &Ctx) {
    ctx.q.get();
    ctx.glob.write(2);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        q: BoundedQueue::new(16),
    });
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
    info!(glob = ctx.glob.read(), "handoff complete");
}
