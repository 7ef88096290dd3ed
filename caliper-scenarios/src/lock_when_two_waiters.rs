//! One waker fans a write out to two `lock_when` waiters. The manual
//! before edge at the flag set covers waiters that arrive after the
//! release, the waiter registration covers ones already parked.

use std::sync::Arc;

use caliper_core::{annotate, RacyCell};
use caliper_sync::{Lock, ThreadSet};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    flag: Lock<i32>,
}

fn waker(ctx: &Ctx) {
    ctx.glob.write(2);
    let mut flag = ctx.flag.lock();
    *flag = 1;
    annotate::happens_before(ctx.flag.edge_id());
}

fn waiter(ctx: &Ctx) {
    {
        let _flag = ctx.flag.lock_when(|f| *f == 1);
    }
    assert_ne!(ctx.glob.read(), 777);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        flag: Lock::new(0),
    });
    let mut threads = ThreadSet::new();
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || waker(&c));
    }
    for _ in 0..2 {
        let c = Arc::clone(&ctx);
        threads.spawn(move || waiter(&c));
    }
    threads.join_all();
    info!(glob = ctx.glob.read(), "both waiters read the value");
}
