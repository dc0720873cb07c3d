//! End-to-end behaviour of the file backend

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use splitlog_core::{log_error, log_info, FileLogger, Logger, SharedLogger};
use tempfile::tempdir;

/// Primary file plus every rotated segment, excluding the error file family
fn primary_history(dir: &Path, name: &str) -> Vec<PathBuf> {
    let err_prefix = format!("{}.err", name);
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            let file_name = p.file_name().unwrap().to_string_lossy().to_string();
            file_name.starts_with(name) && !file_name.starts_with(&err_prefix)
        })
        .collect()
}

fn all_lines(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .flat_map(|p| {
            fs::read_to_string(p)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn concurrent_writers_lose_nothing_across_rotations() {
    const WRITERS: usize = 8;
    const CALLS: usize = 250;

    let dir = tempdir().unwrap();
    let logger = Arc::new(FileLogger::open("debug", dir.path(), "busy.log", 4096).unwrap());

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..CALLS {
                    log_info!(logger, "writer {} call {}", w, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    logger.close();

    let history = primary_history(dir.path(), "busy.log");
    assert!(history.len() > 1, "expected at least one rotation");

    let lines = all_lines(&history);
    assert_eq!(lines.len(), WRITERS * CALLS);

    let mut seen = HashSet::new();
    for line in &lines {
        assert!(line.starts_with('['), "torn line: {:?}", line);
        assert!(line.contains("] [INFO] [file_logger.rs concurrent_writers_lose_nothing_across_rotations "), "torn line: {:?}", line);
        assert!(line.ends_with(' '), "torn line: {:?}", line);
        let body = line.split("] ").last().unwrap().trim_end().to_string();
        assert!(seen.insert(body), "duplicate line: {:?}", line);
    }

    // Every segment except the live one reached the size limit before rotating
    let live = dir.path().join("busy.log");
    for segment in history.iter().filter(|p| **p != live) {
        assert!(fs::metadata(segment).unwrap().len() >= 4096);
    }
}

#[test]
fn error_entries_reach_both_files_through_shared_handle() {
    let dir = tempdir().unwrap();
    let file_logger = Arc::new(FileLogger::open("info", dir.path(), "svc.log", 1 << 20).unwrap());
    let logger: SharedLogger = file_logger.clone();

    logger.debug("hidden");
    logger.warning("visible");
    log_error!(logger, "failed: {}", "disk full");

    let primary = fs::read_to_string(dir.path().join("svc.log")).unwrap();
    let secondary = fs::read_to_string(dir.path().join("svc.log.err")).unwrap();
    assert_eq!(primary.lines().count(), 2);
    assert_eq!(secondary.lines().count(), 1);
    assert!(secondary.contains("[ERROR]"));
    assert!(secondary.contains("error_entries_reach_both_files_through_shared_handle"));
    assert!(secondary.ends_with("failed: disk full \n"));
    assert!(!primary.contains("hidden"));

    file_logger.close();
}

#[test]
fn reopening_appends_to_existing_files() {
    let dir = tempdir().unwrap();
    {
        let logger = FileLogger::open("debug", dir.path(), "app.log", 1 << 20).unwrap();
        logger.info("first run");
    }
    let logger = FileLogger::open("debug", dir.path(), "app.log", 1 << 20).unwrap();
    logger.info("second run");

    let content = fs::read_to_string(dir.path().join("app.log")).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.lines().next().unwrap().ends_with("first run "));
}
