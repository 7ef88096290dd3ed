//! Both threads guard their access with the same lock and both are
//! joined before the parent's final write; only the join order is
//! unusual (the long-delayed reader is joined last). Everything is
//! ordered, but detectors that model joins imprecisely report the
//! parent's write.

use std::sync::Arc;

use caliper_core::{annotate, delay, RacyCell};
use caliper_sync::{Lock, Thread};
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
    mu: Lock<()>,
}

fn writer(ctx: &Ctx) {
    let _guard = ctx.mu.lock();
    ctx.glob.write(1);
}

fn reader(ctx: &Ctx) {
    delay::bias_ms(500);
    let _guard = ctx.mu.lock();
    assert_ne!(ctx.glob.read(), 777);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
        mu: Lock::new(()),
    });
    annotate::expect_race(&ctx.glob);
    let reader_thread = {
        let c = Arc::clone(&ctx);
        Thread::spawn(move || reader(&c))
    };
    let writer_thread = {
        let c = Arc::clone(&ctx);
        Thread::spawn(move || writer(&c))
    };
    writer_thread.join();
    reader_thread.join();
    ctx.glob.write(2);
    info!(glob = ctx.glob.read(), "joins complete");
}
