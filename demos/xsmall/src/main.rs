//! xsmall — smallest boarding run: one full cabin, annotated output.
//!
//! Simulates 40 passengers boarding a 10-row × ABCD single-aisle cabin in a
//! seeded random order, writes the full event trace to CSV, and prints the
//! initial line-up plus the final summary.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use boarding_cabin::{BoardingManifest, CabinLayout};
use boarding_core::{PhysicalParams, SimRng};
use boarding_output::{CsvWriter, TraceOutputObserver};
use boarding_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const ROWS:    u16 = 10;
const COLUMNS: u8  = 4; // A..D
const SEED:    u64 = 131;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== xsmall — rust_boarding ===");
    println!("Cabin: {ROWS} rows x {COLUMNS} columns  |  Seed: {SEED}");
    println!();

    // 1. Build the cabin and deal out seats + boarding order.
    let layout = CabinLayout::new(ROWS, COLUMNS);
    let mut rng = SimRng::new(SEED);
    let manifest = BoardingManifest::random(&layout, layout.seat_count(), &mut rng)?;
    println!(
        "Manifest: {} passengers over {} seats",
        manifest.len(),
        layout.seat_count()
    );

    // 2. Build the sim with the default physical constants.
    let sim_params = PhysicalParams::default();
    let mut sim = SimBuilder::new(manifest).params(sim_params).build()?;

    // 3. Show the head of the initial line-up (front of the cabin first).
    let snap = sim.snapshot();
    println!();
    println!("Initial line-up at {}:", snap.time);
    println!(
        "{:<8} {:<6} {:<10} {:>9} {:>7}",
        "Person", "Seat", "State", "Position", "Goal"
    );
    println!("{}", "-".repeat(44));
    for p in snap.passengers.iter().take(5) {
        println!(
            "{:<8} {:<6} {:<10} {:>9.2} {:>7.2}",
            p.person.0,
            p.seat.label(),
            p.state.name(),
            p.position,
            p.goal
        );
    }
    if snap.passengers.len() > 5 {
        println!("... and {} more", snap.passengers.len() - 5);
    }

    // 4. Set up CSV trace output.
    std::fs::create_dir_all("output/xsmall")?;
    let writer = CsvWriter::new(Path::new("output/xsmall"))?;
    let mut obs = TraceOutputObserver::new(writer);

    // 5. Run.
    let t0 = Instant::now();
    let total = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!(
        "Boarding complete at {total} simulated ({} events, {:.3} ms wall time)",
        sim.events_processed(),
        elapsed.as_secs_f64() * 1e3
    );
    println!("  transitions.csv / run_summary.csv written to output/xsmall/");

    Ok(())
}
