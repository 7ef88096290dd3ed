//! The locked twin of `delay_masked_race`: the value lives inside the
//! lock, the writer stores immediately and the reader reads a second
//! later. Properly synchronized from every angle.

use std::sync::Arc;

use caliper_core::delay;
use caliper_sync::{Lock, ThreadSet};
use tracing::info;

struct Ctx {
    glob: Lock<i32>,
}

fn writer(ctx: &Ctx) {
    *ctx.glob.lock() = 3;
}

fn reader(ctx: &Ctx) {
    delay::bias_ms(1000);
    assert_ne!(*ctx.glob.lock(), -777);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: Lock::new(0),
    });
    let mut threads = ThreadSet::new();
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || writer(&c));
    }
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || reader(&c));
    }
    threads.join_all();
    info!(glob = *ctx.glob.lock(), "locked twin finished");
}
