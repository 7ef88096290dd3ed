//! The flag is never set, so `await_when_timeout` runs out and the
//! parent writes anyway. The worker's write and the parent's write are
//! unordered: a real race, biased so both threads are alive when it
//! happens.

use std::sync::Arc;
use std::time::Duration;

use caliper_core::{annotate, delay, RacyCell};
use caliper_sync::{Lock, WorkerPool};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    flag: Lock<i32>,
}

fn waker(ctx: &Ctx) {
    ctx.glob.write(1);
    delay::bias_ms(100);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        flag: Lock::new(0),
    });
    annotate::expect_race(&ctx.glob);
    {
        let mut pool = WorkerPool::new(1);
        pool.start();
        let task_ctx = Arc::clone(&ctx);
        pool.submit(move || waker(&task_ctx));

        let mut flag = ctx.flag.lock();
        let settled = flag.await_when_timeout(|f| *f == 1, Duration::from_millis(100));
        assert!(!settled);
        drop(flag);
        ctx.glob.write(2);
    }
    info!(glob = ctx.glob.read(), "wait expired");
}
