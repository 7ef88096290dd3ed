//! Four workers hammer one counter through every acquisition mode the
//! shared lock offers: spinning on `try_write`, spinning on `try_read`,
//! plain reads and plain writes. All access is under the lock, so a
//! detector has nothing to report.

use std::sync::Arc;

use caliper_core::delay;
use caliper_sync::{SharedLock, ThreadSet};
use tracing::info;

const ROUNDS: usize = 20;

struct Ctx {
    counter: SharedLock<i32>,
}

fn try_writer(ctx: &Ctx) {
    for _ in 0..ROUNDS {
        loop {
            if let Some(mut counter) = ctx.counter.try_write() {
                *counter += 1;
                break;
            }
        }
        delay::bias_ms(1);
    }
}

fn try_reader(ctx: &Ctx) {
    for _ in 0..ROUNDS {
        loop {
            if let Some(counter) = ctx.counter.try_read() {
                assert_ne!(*counter, 777);
                break;
            }
        }
        delay::bias_ms(1);
    }
}

fn reader(ctx: &Ctx) {
    for _ in 0..ROUNDS {
        assert_ne!(*ctx.counter.read(), 777);
        delay::bias_ms(1);
    }
}

fn writer(ctx: &Ctx) {
    for _ in 0..ROUNDS {
        *ctx.counter.write() += 1;
        delay::bias_ms(1);
    }
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        counter: SharedLock::new(0),
    });
    let mut threads = ThreadSet::new();
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || try_writer(&c));
    }
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || try_reader(&c));
    }
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || reader(&c));
    }
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || writer(&c));
    }
    threads.join_all();
    info!(counter = *ctx.counter.read(), "all acquisition modes agreed");
}
