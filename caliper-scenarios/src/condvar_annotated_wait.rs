//! `condvar_missed_wait` with the fix applied: both halves of the
//! condvar's edge are emitted manually, so the handoff stays visible
//! even when the wait is skipped.

use std::sync::Arc;

use caliper_core::{annotate, delay, RacyCell};
use caliper_sync::{CondVar, Lock, WorkerPool};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    flag: Lock<i32>,
    ready: CondVar,
}

fn waker(ctx: &Ctx) {
    ctx.glob.write(1);
    let mut flag = ctx.flag.lock();
    *flag = 1;
    ctx.ready.signal();
    annotate::happens_before(ctx.ready.edge_id());
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        flag: Lock::new(0),
        ready: CondVar::new(),
    });
    {
        let mut pool = WorkerPool::new(1);
        pool.start();
        let task_ctx = Arc::clone(&ctx);
        pool.submit(move || waker(&task_ctx));

        delay::bias_ms(1000);
        let mut flag = ctx.flag.lock();
        while *flag != 1 {
            ctx.ready.wait(&mut flag);
        }
        annotate::happens_after(ctx.ready.edge_id());
        drop(flag);
        ctx.glob.write(2);
    }
    info!(glob = ctx.glob.read(), "annotated wait complete");
}
