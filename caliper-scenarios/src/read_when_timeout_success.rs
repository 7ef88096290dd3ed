//! `read_when_timeout` with a timeout far beyond the writer's delay.

use std::sync::Arc;
use std::time::Duration;

use caliper_core::{delay, RacyCell};
use caliper_sync::{SharedLock, WorkerPool};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    flag: SharedLock<i32>,
}

fn waker(ctx: &Ctx) {
    delay::bias_ms(1000);
    ctx.glob.write(1);
    *ctx.flag.write() = 1;
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        flag: SharedLock::new(0),
    });
    {
        let mut pool = WorkerPool::new(1);
        pool.start();
        let task_ctx = Arc::clone(&ctx);
        pool.submit(move || waker(&task_ctx));

        let flag = ctx
            .flag
            .read_when_timeout(|f| *f == 1, Duration::from_millis(i32::MAX as u64));
        assert!(flag.is_some());
        drop(flag);
        ctx.glob.write(2);
    }
    info!(glob = ctx.glob.read(), "read settled inside the deadline");
}
