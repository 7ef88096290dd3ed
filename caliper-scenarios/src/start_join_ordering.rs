//! Three writes to one cell, ordered purely by spawn and join.

use std::sync::Arc;

use caliper_core::RacyCell;
use caliper_sync::Thread;
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
}

fn worker(ctx: &Ctx) {
    ctx.glob.write(2);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
    });
    ctx.glob.write(1);
    let thread = {
        let c = Arc::clone(&ctx);
        Thread::spawn(move || worker(&c))
    };
    thread.join();
    ctx.glob.write(3);
    info!(glob = ctx.glob.read(), "spawn and join ordered everything");
}
