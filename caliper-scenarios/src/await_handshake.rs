//! The waiter takes the lock first and re-waits in place with
//! `await_when` while the delayed waker sets the flag.

use std::sync::Arc;

use caliper_core::{delay, RacyCell};
use caliper_sync::{Lock, WorkerPool};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    flag: Lock<i32>,
}

fn waker(ctx: &Ctx) {
    delay::bias_ms(1000);
    ctx.glob.write(1);
    *ctx.flag.lock() = 1;
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

        let mut flag = ctx.flag.lock();
        flag.await_when(|f| *f == 1);
        drop(flag);
        ctx.glob.write(2);
    }
    info!(glob = ctx.glob.read(), "handshake complete");
}
