//! sweep — how much does boarding order matter?
//!
//! Runs many boarding attempts over the same cabin, each with a freshly
//! shuffled seat assignment and queue, and reports the spread of total
//! boarding times.  Runs are sequential; each derives its own child seed so
//! any single run can be reproduced in isolation.

use anyhow::Result;

use boarding_cabin::{BoardingManifest, CabinLayout};
use boarding_core::SimRng;
use boarding_sim::{NoopObserver, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROWS:    u16   = 10;
const COLUMNS: u8    = 4;
const RUNS:    usize = 200;
const SEED:    u64   = 42;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== sweep — {RUNS} shuffled boarding orders ===");
    println!("Cabin: {ROWS} rows x {COLUMNS} columns  |  Root seed: {SEED}");
    println!();

    let layout = CabinLayout::new(ROWS, COLUMNS);
    let mut root = SimRng::new(SEED);

    let mut totals = Vec::with_capacity(RUNS);
    for run in 0..RUNS {
        let mut rng = root.child(run as u64);
        let manifest = BoardingManifest::random(&layout, layout.seat_count(), &mut rng)?;
        let mut sim = SimBuilder::new(manifest).build()?;
        let mut obs = NoopObserver;
        totals.push(sim.run(&mut obs)?.seconds());
    }

    totals.sort_by(f64::total_cmp);
    let min = totals[0];
    let max = totals[RUNS - 1];
    let mean = totals.iter().sum::<f64>() / RUNS as f64;
    let median = totals[RUNS / 2];

    println!("Total boarding time over {RUNS} runs:");
    println!("  min    {min:8.1} s");
    println!("  median {median:8.1} s");
    println!("  mean   {mean:8.1} s");
    println!("  max    {max:8.1} s");
    println!();

    // Coarse histogram: 10 equal-width buckets between min and max.
    const BUCKETS: usize = 10;
    let width = ((max - min) / BUCKETS as f64).max(f64::MIN_POSITIVE);
    let mut counts = [0usize; BUCKETS];
    for &t in &totals {
        let b = (((t - min) / width) as usize).min(BUCKETS - 1);
        counts[b] += 1;
    }
    for (b, &count) in counts.iter().enumerate() {
        let lo = min + b as f64 * width;
        println!("  {lo:7.0}s | {}", "#".repeat(count));
    }

    Ok(())
}
