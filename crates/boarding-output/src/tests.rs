//! End-to-end writer tests: run a sim, stream the trace to CSV, read the
//! files back.

use std::fs;

use boarding_cabin::{BoardingManifest, Seat};
use boarding_core::{PersonId, RowId};
use boarding_sim::SimBuilder;
use tempfile::tempdir;

use crate::writer::OutputWriter;
use crate::{CsvWriter, TraceOutputObserver};

fn seat(row: u16, column: u8) -> Seat {
    Seat::new(RowId(row), column)
}

#[test]
fn csv_writer_produces_trace_and_summary() {
    let dir = tempdir().unwrap();
    let writer = CsvWriter::new(dir.path()).unwrap();
    let mut obs = TraceOutputObserver::new(writer);

    let m = BoardingManifest::new(vec![seat(1, 0)], vec![PersonId(0)]).unwrap();
    let mut sim = SimBuilder::new(m).build().unwrap();
    let total = sim.run(&mut obs).unwrap();
    assert!(obs.take_error().is_none());

    let transitions = fs::read_to_string(dir.path().join("transitions.csv")).unwrap();
    let lines: Vec<&str> = transitions.lines().collect();
    assert_eq!(lines[0], "time_secs,person,from,to");
    assert_eq!(lines.len(), 5, "header + 4 transitions");
    assert!(lines[1].ends_with("0,waiting,unblocked"), "got {:?}", lines[1]);
    assert!(lines[4].ends_with("0,packing,seated"), "got {:?}", lines[4]);

    let summary = fs::read_to_string(dir.path().join("run_summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "passengers,events,total_secs");
    assert_eq!(lines[1], format!("1,3,{}", total.seconds()));
}

#[test]
fn blocking_run_counts_add_up() {
    let dir = tempdir().unwrap();
    let writer = CsvWriter::new(dir.path()).unwrap();
    let mut obs = TraceOutputObserver::new(writer);

    // Row-1 passenger directly ahead of a row-5 passenger: the rear one gets
    // blocked once, so the run produces 8 events and 11 transitions.
    let m = BoardingManifest::new(
        vec![seat(1, 0), seat(5, 0)],
        vec![PersonId(0), PersonId(1)],
    )
    .unwrap();
    let mut sim = SimBuilder::new(m).build().unwrap();
    sim.run(&mut obs).unwrap();
    assert!(obs.take_error().is_none());

    let transitions = fs::read_to_string(dir.path().join("transitions.csv")).unwrap();
    assert_eq!(transitions.lines().count(), 12, "header + 11 transitions");

    let summary = fs::read_to_string(dir.path().join("run_summary.csv")).unwrap();
    let row = summary.lines().nth(1).unwrap();
    assert!(row.starts_with("2,8,"), "got {row:?}");
}

#[test]
fn finish_is_idempotent() {
    let dir = tempdir().unwrap();
    let mut writer = CsvWriter::new(dir.path()).unwrap();
    writer.finish().unwrap();
    writer.finish().unwrap();
}
