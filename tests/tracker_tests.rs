//! Reconciliation and toggling against files on disk
mod common;

use chrono::{FixedOffset, TimeZone};
use common::TestFiles;
use life_goals::{GoalMetadata, MetadataStore, TrackerError};
use regex::Regex;
use std::fs;

#[test]
fn test_reconcile_creates_one_record_per_goal() {
    let files = TestFiles::new("[Work]\nShip a product\n[Home]\nPlant a tree\nWrite a book\n");
    let server = files.server();

    let records = server.tracker().reconcile().unwrap();
    let goals: Vec<&str> = records.iter().map(|r| r.goal.as_str()).collect();
    assert_eq!(goals, vec!["Ship a product", "Plant a tree", "Write a book"]);

    for goal in goals {
        assert_eq!(records.iter().filter(|r| r.goal == goal).count(), 1);
    }
}

#[test]
fn test_reconcile_is_idempotent() {
    let files = TestFiles::new("[Work]\nA\n[Home]\nB\n");
    let server = files.server();

    server.tracker().reconcile().unwrap();
    let first = files.metadata();
    server.tracker().reconcile().unwrap();
    assert_eq!(files.metadata(), first);
}

#[test]
fn test_reconcile_appends_new_goals_in_order() {
    let files = TestFiles::new("[Work]\nA\n");
    let server = files.server();
    server.tracker().reconcile().unwrap();

    files.write_goals("[Work]\nC\nA\n[Home]\nB\n");
    let records = server.tracker().reconcile().unwrap();
    let goals: Vec<&str> = records.iter().map(|r| r.goal.as_str()).collect();
    assert_eq!(goals, vec!["A", "C", "B"]);
}

#[test]
fn test_missing_goal_file_creates_empty_metadata() {
    let files = TestFiles::new("");
    fs::remove_file(files.goals_path()).unwrap();
    let server = files.server();

    assert!(server.tracker().reconcile().unwrap().is_empty());
    assert_eq!(files.metadata(), "[]");
}

#[test]
fn test_toggle_twice_restores_pending() {
    let files = TestFiles::new("[Health]\nRun a marathon\n");
    let server = files.server();
    server.tracker().reconcile().unwrap();
    let original = files.metadata();

    let toggled = server.tracker().toggle_completion("Run a marathon").unwrap();
    assert_eq!(toggled.len(), 1);
    assert!(toggled[0].completed);

    let toggled = server.tracker().toggle_completion("Run a marathon").unwrap();
    assert_eq!(toggled, vec![GoalMetadata::pending("Run a marathon")]);
    assert_eq!(files.metadata(), original);
}

#[test]
fn test_toggle_stamps_local_time_shape() {
    let files = TestFiles::new("[Health]\nRun a marathon\n");
    let server = files.server();
    server.tracker().reconcile().unwrap();

    let record = server
        .tracker()
        .toggle_completion("Run a marathon")
        .unwrap()
        .remove(0);
    let tz = Regex::new(r"^[+-]\d{2}:\d{2}$").unwrap();
    let date = Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap();
    let time = Regex::new(r"^\d{2}:\d{2}:\d{2}$").unwrap();
    assert!(tz.is_match(record.timezone.as_deref().unwrap()));
    assert!(date.is_match(record.date.as_deref().unwrap()));
    assert!(time.is_match(record.time.as_deref().unwrap()));
}

#[test]
fn test_toggle_at_fixed_time_is_persisted() {
    let files = TestFiles::new("[Travel]\nSee the aurora\n");
    let server = files.server();
    server.tracker().reconcile().unwrap();

    let tz = FixedOffset::west_opt(9 * 3600 + 30 * 60).unwrap();
    let now = tz.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();
    server
        .tracker()
        .toggle_completion_at("See the aurora", &now)
        .unwrap();

    let stored = server.tracker().store().load().unwrap();
    assert_eq!(stored[0].date.as_deref(), Some("31/12/2023"));
    assert_eq!(stored[0].time.as_deref(), Some("23:59:58"));
    assert_eq!(stored[0].timezone.as_deref(), Some("-09:30"));
    assert!(files.metadata().contains("\"timezone\": \"-09:30\""));
}

#[test]
fn test_toggle_unknown_goal_leaves_file_untouched() {
    let files = TestFiles::new("[Work]\nA\n");
    let server = files.server();
    server.tracker().reconcile().unwrap();
    let before = files.metadata();

    assert!(server.tracker().toggle_completion("B").unwrap().is_empty());
    assert_eq!(files.metadata(), before);
}

#[test]
fn test_malformed_metadata_is_fatal() {
    let files = TestFiles::new("[Work]\nA\n");
    fs::write(files.metadata_path(), "[{\"goal\": 1}]").unwrap();
    let server = files.server();

    assert!(matches!(
        server.tracker().reconcile(),
        Err(TrackerError::Json(_))
    ));
    assert!(matches!(
        server.tracker().toggle_completion("A"),
        Err(TrackerError::Json(_))
    ));
}
