//! Correct condvar handshake: the waker publishes a write, the waiter
//! consumes it after the flag flips. No race.

use std::sync::Arc;

use caliper_core::{delay, RacyCell};
use caliper_sync::{CondVar, Lock, WorkerPool};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    flag: Lock<i32>,
    ready: CondVar,
}

fn waker(ctx: &Ctx) {
    delay::bias_ms(10);
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
    {
        let mut pool = WorkerPool::new(1);
        pool.start();
        let task_ctx = Arc::clone(&ctx);
        pool.submit(move || waker(&task_ctx));

        let mut flag = ctx.flag.lock();
        while *flag != 1 {
            ctx.ready.wait(&mut flag);
        }
        drop(flag);
        ctx.glob.write(2);
    }
    info!(glob = ctx.glob.read(), "handshake complete");
}
