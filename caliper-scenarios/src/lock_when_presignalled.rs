//! The waker sets the flag and emits the lock's before edge while the
//! waiter is still asleep. When the waiter's `lock_when` later passes
//! on the first check, its after edge pairs with the manual one; the
//! release itself saw no registered waiter and emitted nothing.

use std::sync::Arc;

use caliper_core::{annotate, delay, RacyCell};
use caliper_sync::{Lock, WorkerPool};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    flag: Lock<i32>,
}

fn waker(ctx: &Ctx) {
    ctx.glob.write(1);
    let mut flag = ctx.flag.lock();
    *flag = 1;
    annotate::happens_before(ctx.flag.edge_id());
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        flag: Lock::new(0),
    });
    {
        let mut pool = WorkerPool::new(1);
        pool.start();
        let task_ctx = Arc::clone(&ctx);
        pool.submit(move || waker(&task_ctx));

        delay::bias_ms(1000);
        let flag = ctx.flag.lock_when(|f| *f == 1);
        drop(flag);
        ctx.glob.write(2);
    }
    info!(glob = ctx.glob.read(), "late waiter passed");
}
