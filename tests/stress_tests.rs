//! Stress tests for serialized line emission
//!
//! These tests verify:
//! - Concurrent writers never interleave bytes within a line
//! - Reconfiguration racing with writes only ever yields whole lines
//! - File sinks survive being swapped under load

use flg::core::timestamp::DEFAULT_TIME_FORMAT;
use flg::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

/// Check `[timestamp ]` and strip it, returning the remainder of the line.
fn strip_timestamp(line: &str) -> &str {
    let (stamp, rest) = line.split_at(19);
    assert!(
        chrono::NaiveDateTime::parse_from_str(stamp, DEFAULT_TIME_FORMAT).is_ok(),
        "bad timestamp in {:?}",
        line
    );
    rest.strip_prefix(' ').expect("single space after timestamp")
}

/// Two writers, 1,000 lines each, timestamp and prefix enabled
#[test]
fn test_two_writers_thousand_lines_each() {
    let sink = MemorySink::new();
    let logger = Arc::new(Logger::builder().sink(sink.clone()).prefix("[svc] ").build());

    let handles: Vec<_> = (0..2)
        .map(|writer| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..1000 {
                    logger
                        .write(&format!("writer={} seq={}\n", writer, i))
                        .expect("write");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    let content = sink.contents_string();
    let mut seen = HashSet::new();
    for line in content.lines() {
        let rest = strip_timestamp(line);
        let record = rest.strip_prefix("[svc] ").expect("prefix");
        assert!(seen.insert(record.to_string()), "duplicate record {:?}", record);
    }
    assert_eq!(seen.len(), 2000);
    for writer in 0..2 {
        for i in 0..1000 {
            assert!(seen.contains(&format!("writer={} seq={}", writer, i)));
        }
    }
}

/// Per-thread order is preserved even though cross-thread order is not
#[test]
fn test_per_thread_order_preserved() {
    let sink = MemorySink::new();
    let logger = Arc::new(Logger::builder().sink(sink.clone()).no_timestamp().build());

    let handles: Vec<_> = (0..8)
        .map(|writer| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..500 {
                    logger.write(&format!("{} {}\n", writer, i)).expect("write");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    let mut next = [0u32; 8];
    for line in sink.contents_string().lines() {
        let (writer, seq) = line.split_once(' ').expect("separator");
        let writer: usize = writer.parse().expect("writer id");
        let seq: u32 = seq.parse().expect("sequence");
        assert_eq!(seq, next[writer], "writer {} out of order", writer);
        next[writer] += 1;
    }
    assert!(next.iter().all(|&count| count == 500));
}

/// Prefix changes racing with writes never split a prefix across lines
#[test]
fn test_prefix_changes_during_writes() {
    let sink = MemorySink::new();
    let logger = Arc::new(Logger::builder().sink(sink.clone()).no_timestamp().build());

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..2000 {
                logger.write(&format!("msg{}\n", i)).expect("write");
            }
        })
    };
    let reconfigurer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..2000 {
                logger.set_prefix(if i % 2 == 0 { "[even] " } else { "[odd] " });
                let _ = logger.prefix();
            }
        })
    };
    writer.join().expect("writer thread panicked");
    reconfigurer.join().expect("reconfigurer thread panicked");

    let content = sink.contents_string();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2000);
    for (i, line) in lines.iter().enumerate() {
        let message = format!("msg{}", i);
        let valid = [
            message.clone(),
            format!("[even] {}", message),
            format!("[odd] {}", message),
        ];
        assert!(valid.contains(&line.to_string()), "corrupt line {:?}", line);
    }
}

/// Swapping log files while other threads write loses and splits nothing
#[test]
fn test_file_swaps_under_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let paths: Vec<_> = (0..4)
        .map(|i| temp_dir.path().join(format!("swap_{}.log", i)))
        .collect();

    let logger = Arc::new(Logger::builder().filename(&paths[0]).no_timestamp().build());

    let writers: Vec<_> = (0..4)
        .map(|writer| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..250 {
                    logger.write(&format!("w{}-{}\n", writer, i)).expect("write");
                }
            })
        })
        .collect();
    let swapper = {
        let logger = Arc::clone(&logger);
        let paths = paths.clone();
        thread::spawn(move || {
            for round in 0..40 {
                logger.set_filename(&paths[round % paths.len()]);
            }
        })
    };
    for handle in writers {
        handle.join().expect("writer thread panicked");
    }
    swapper.join().expect("swapper thread panicked");
    drop(logger);

    let mut total = 0;
    for path in &paths {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        for line in content.lines() {
            let (writer, seq) = line
                .strip_prefix('w')
                .and_then(|rest| rest.split_once('-'))
                .expect("well-formed line");
            assert!(writer.parse::<u32>().expect("writer") < 4);
            assert!(seq.parse::<u32>().expect("seq") < 250);
            total += 1;
        }
    }
    assert_eq!(total, 1000);
}
