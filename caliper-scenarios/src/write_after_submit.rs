//! A pool task and its submitter write the same cell with nothing
//! ordering the writes. The plainest possible real race.

use std::sync::Arc;

use caliper_core::{annotate, RacyCell};
use caliper_sync::WorkerPool;
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
}

fn worker(ctx: &Ctx) {
    ctx.glob.write(1);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
    });
    annotate::expect_race(&ctx.glob);
    {
        let mut pool = WorkerPool::new(1);
        pool.start();
        let task_ctx = Arc::clone(&ctx);
        pool.submit(move || worker(&task_ctx));
        ctx.glob.write(2);
    }
    info!(glob = ctx.glob.read(), "pool drained");
}
