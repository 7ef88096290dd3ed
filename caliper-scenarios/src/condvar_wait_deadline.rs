//! A hand-rolled deadline loop over `CondVar::wait_timeout`. No signal
//! ever arrives; the loop runs the deadline down and the parent writes
//! anyway, racing with the worker's write.

use std::sync::Arc;
use std::time::{Duration, Instant};

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
    delay::bias_ms(100);
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

        let deadline = Instant::now() + Duration::from_millis(100);
        let mut flag = ctx.flag.lock();
        while *flag != 1 {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            ctx.ready.wait_timeout(&mut flag, deadline - now);
        }
        drop(flag);
        ctx.glob.write(2);
    }
    info!(glob = ctx.glob.read(), "deadline spent without a signal");
}
