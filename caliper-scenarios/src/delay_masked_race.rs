//! The twin of `delayed_write_race` with the delay on the reader. The
//! race is just as real, but because the write consistently lands a
//! second before the read, detectors that trim old accesses or treat
//! elapsed time as ordering will miss it. Nothing is declared: a report
//! here is a hit the suite does not expect from typical detectors.

use std::sync::Arc;

use caliper_core::{delay, RacyCell};
use caliper_sync::ThreadSet;
use tracing::info;

struct Ctx {
    glob: RacyCell<i32>,
}

fn writer(ctx: &Ctx) {
    ctx.glob.write(3);
}

fn reader(ctx: &Ctx) {
    delay::bias_ms(1000);
    assert_ne!(ctx.glob.read(), -777);
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        glob: RacyCell::new(0),
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
    info!(glob = ctx.glob.read(), "masked race finished");
}
