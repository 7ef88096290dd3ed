//! The reader-side predicate acquisition: `read_when` parks until a
//! delayed writer sets the flag, then the waiter consumes the published
//! write.

use std::sync::Arc;

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

        let flag = ctx.flag.read_when(|f| *f == 1);
        drop(flag);
        ctx.glob.write(2);
    }
    info!(glob = ctx.glob.read(), "handshake complete");
}
