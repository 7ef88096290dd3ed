//! Two workers read the cell, then each bumps a counter under the lock
//! and signals. The parent waits for both bumps and writes the cell
//! before joining. The counter handshake really does order the reads
//! before the write, but the cell is accessed both under no lock and
//! after a condvar wait, which lockset detectors typically flag.

use std::sync::Arc;

use caliper_core::{annotate, delay, RacyCell};
use caliper_sync::{CondVar, Lock, ThreadSet};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    count: Lock<i32>,
    ready: CondVar,
}

fn worker(ctx: &Ctx) {
    delay::bias_ms(10);
    assert_ne!(ctx.glob.read(), 777);
    let mut count = ctx.count.lock();
    *count += 1;
    ctx.ready.signal();
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        count: Lock::new(0),
        ready: CondVar::new(),
    });
    annotate::expect_race(&ctx.glob);
    let mut threads = ThreadSet::new();
    for _ in 0..2 {
        let c = Arc::clone(&ctx);
        threads.spawn(move || worker(&c));
    }

    let mut count = ctx.count.lock();
    while *count != 2 {
        ctx.ready.wait(&mut count);
    }
    drop(count);
    ctx.glob.write(2);

    threads.join_all();
    info!(glob = ctx.glob.read(), "both workers counted in");
}
