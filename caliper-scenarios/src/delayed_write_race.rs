//! A write delayed by a full second against an immediate read. The
//! delay makes the read win the race on every practical run, but
//! nothing orders the two accesses.

use std::sync::Arc;

use caliper_core::{annotate, delay, RacyCell};
use caliper_sync::ThreadSet;
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
}

fn writer(ctx: &Ctx) {
    delay::bias_ms(1000);
    ctx.glob.write(3);
}

fn reader(ctx: &Ctx) {
    assert_ne!(ctx.glob.read(), -777);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
    });
    annotate::expect_race(&ctx.glob);
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
    info!(glob = ctx.glob.read(), "unordered write and read finished");
}
