//! Four workers increment a counter under a spinlock. The only
//! synchronization is the atomic flag the spinlock spins on.

use std::sync::Arc;

use caliper_core::delay;
use caliper_sync::{SpinLock, ThreadSet};
use tracing::info;

struct Ctx {
    counter: SpinLock<i32>,
}

fn worker(ctx: &Ctx) {
    *ctx.counter.lock() += 1;
    delay::bias_ms(10);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        counter: SpinLock::new(0),
    });
    let mut threads = ThreadSet::new();
    for _ in 0..4 {
        let c = Arc::clone(&ctx);
        threads.spawn(move || worker(&c));
    }
    threads.join_all();
    info!(counter = *ctx.counter.lock(), "spinlock held up");
}
