//! Like `lock_then_queue`, with the handoff built from `lock_when` and
//! a manual edge instead of a queue. The final unguarded increment is
//! ordered by the flag handoff, yet its lockset is empty.

use std::sync::Arc;

use caliper_core::{annotate, RacyCell};
use caliper_sync::{Lock, ThreadSet};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    flag: Lock<i32>,
}

fn waker(ctx: &Ctx) {
    {
        let _guard = ctx.flag.lock();
        ctx.glob.update(|v| v + 1);
    }
    let mut flag = ctx.flag.lock();
    *flag = 1;
    annotate::happens_before(ctx.flag.edge_id());
}

fn waiter(ctx: &Ctx) {
    {
        let _guard = ctx.flag.lock();
        ctx.glob.update(|v| v + 1);
    }
    {
        let _flag = ctx.flag.lock_when(|f| *f == 1);
    }
    ctx.glob.update(|v| v + 1);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        flag: Lock::new(0),
    });
    annotate::expect_race(&ctx.glob);
    let mut threads = ThreadSet::new();
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || waker(&c));
    }
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || waiter(&c));
    }
    threads.join_all();
    info!(glob = ctx.glob.read(), "three increments landed");
}
