//! The signal lands long before the waiter arrives, so the waiter's
//! flag check skips the wait entirely and no signal/wait pairing ever
//! happens. The handoff is still correct (the flag travels under the
//! lock), but a detector keying on condvar pairings sees nothing and is
//! expected to report the two writes.

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
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        flag: Lock::new(0),
        ready: CondVar::new(),
    });
    annotate::expect_race(&ctx.glob);
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
        drop(flag);
        ctx.glob.write(2);
    }
    info!(glob = ctx.glob.read(), "wait was skipped");
}
