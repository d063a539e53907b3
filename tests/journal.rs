//! The JSON-lines journal written by a real session.

use company_roster::app::{handle_command, Command};
use company_roster::domain::{EventKind, Gender, Profile, Rank, RosterEvent};
use company_roster::observability::JournalSink;
use company_roster::{initialize, Config, EventSink};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn read_lines(path: &Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn session_events_are_journaled_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("events.jsonl");
    let config = Config {
        journal_path: Some(path.clone()),
        color: false,
        ..Default::default()
    };

    let mut state = initialize(&config, Profile::new("倍井 杉蔵", Gender::Male, 88));
    for command in [
        Command::hire("鈴木 二郎", Gender::Male, 44, Rank::Executive),
        Command::hire("佐藤 太郎", Gender::Male, 22, Rank::Junior),
        Command::Promote {
            name: "佐藤 太郎".into(),
        },
        Command::Resign,
    ] {
        handle_command(&mut state, &command);
    }

    let entries = read_lines(&path);
    let kinds: Vec<&str> = entries
        .iter()
        .map(|e| e["event"]["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["hired", "hired", "promoted", "succession_completed"]
    );

    assert_eq!(entries[2]["event"]["from"], "junior");
    assert_eq!(entries[2]["event"]["to"], "lead");
    assert_eq!(entries[3]["event"]["incoming"], "鈴木 二郎");
    assert!(entries
        .iter()
        .all(|e| e["timestamp"].as_str().is_some_and(|t| t.ends_with('Z'))));
}

#[test]
fn journaled_events_deserialize_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let journal = JournalSink::new(path.clone());

    let event = RosterEvent::AtCeiling {
        name: "周 八郎".into(),
        rank: Rank::Executive,
    };
    journal.emit(event.clone());

    let entries = read_lines(&path);
    assert_eq!(entries.len(), 1);
    let parsed: RosterEvent = serde_json::from_value(entries[0]["event"].clone()).unwrap();
    assert_eq!(parsed, event);
    assert_eq!(parsed.kind(), EventKind::AtCeiling);
}

#[test]
fn unwritable_journal_reports_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let journal = JournalSink::new(blocker.join("events.jsonl"));
    let event = RosterEvent::CapacityReached {
        name: "x".into(),
        limit: 10,
    };

    assert!(journal.record(&event).is_err());
    // as a sink it only logs
    journal.emit(event);
}
