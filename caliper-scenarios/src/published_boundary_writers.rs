//! The writer/writer variant of `published_boundary_readers`. The
//! second thread mutates cells, but only below the published boundary,
//! while the first keeps rewriting from the boundary up. The prefix
//! handoff keeps the two write ranges disjoint at all times.

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

fn publisher(ctx: &Ctx) {
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

fn mutator(ctx: &Ctx) {
    loop {
        let n = ctx.boundary.read();
        if n == 0 {
            continue;
        }
        annotate::happens_after(n as u64);
        for i in 0..n {
            if ctx.items[i].read() == i {
                ctx.items[i].update(|v| v + 1);
            }
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
        threads.spawn(move || publisher(&c));
    }
    {
        let c = Arc::clone(&ctx);
        threads.spawn(move || mutator(&c));
    }
    threads.join_all();
    info!(boundary = ctx.boundary.read(), "disjoint writers finished");
}
