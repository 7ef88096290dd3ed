//! Prefix publication through a racy boundary. The writer fills the
//! array past `i`, emits a before edge keyed by the next boundary
//! value, then advances the boundary. Readers poll the boundary, emit
//! the matching after edge and scan only the published prefix. The
//! array accesses are therefore ordered even though the boundary cell
//! itself is racy, which is exactly what is declared.
//!
//! Edge ids here are the boundary values themselves. They sit far below
//! the id range the primitives allocate from, so the two spaces cannot
//! collide.

use std::sync::Arc;
use std::time::Duration;

use caliper_core::{annotate, delay, RacyCell};
use caliper_sync::ThreadSet;
use tracing::info;

const CELLS: usize = 50;

struct Ctx {
    items: Vec<RacyCell<usize>>,
    boundary: RacyCell<usize>,
}

fn writer(ctx: &Ctx) {
    for i in 0..CELLS {
        assert_eq!(ctx.boundary.read(), i);
        for j in i..CELLS {
            ctx.items[j].write(j);
        }
        annotate::happens_before((i + 1) as u64);
        ctx.boundary.write(i + 1);
        delay::bias_ms(1);
    }
}

fn reader(ctx: &Ctx) {
    loop {
        let n = ctx.boundary.read();
        if n == 0 {
            continue;
        }
        annotate::happens_after(n as u64);
        for i in 0..n {
            assert_eq!(ctx.items[i].read(), i);
        }
        delay::bias(Duration::from_micros(100));
        if n >= CELLS {
            break;
        }
    }
}

pub fn run() {
    let ctx = Arc::new(Ctx {
        items: (0..CELLS).map(|_| RacyCell::new(0)).collect(),
        boundary: RacyCell::new(0),
    });
    annotate::expect_race(&ctx.boundary);
    let mut threads = ThreadSet::new();
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || writer(&c));
    }
    for _ in 0..3 {
        let c = Arc::clone(&ctx);
        threads.spawn(move || reader(&c));
    }
    threads.join_all();
    info!(boundary = ctx.boundary.read(), "prefix fully published");
}
