// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use hsm_broker_core::{TierAttributes, TierFlags};
use serial_test::serial;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use super::utils::{active_broker, mock};
use crate::logging::LogLevel;
use crate::support::test_utils::{directory, file, tape_tier};

const ON_TAPE: &str = "/hpss/in2p3.fr/group/on_tape.root";
const DIRECTORY: &str = "/hpss/in2p3.fr/group";

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs a session with a staged file, a directory and an unknown name under
/// a subscriber filtered at `level`, and returns what it printed.
fn run_at(level: LogLevel) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::registry().with(level.as_level_filter()).with(
        fmt::layer()
            .with_ansi(false)
            .with_writer(move || writer.clone()),
    );

    tracing::subscriber::with_default(subscriber, || {
        let client = mock()
            .with_file(
                ON_TAPE,
                file(vec![
                    TierAttributes::without_data(TierFlags::LEVEL_IS_DISK),
                    tape_tier(1, "IT0001", 2048, 5),
                ]),
            )
            .with_file(DIRECTORY, directory());
        let broker = active_broker(client);

        let record = broker.locate(ON_TAPE).expect("Failed to locate(..)");
        broker.stage(ON_TAPE, record.size).expect("Failed to stage(..)");
        let _ = broker.locate(DIRECTORY);
        let _ = broker.locate("/hpss/missing");
    });

    capture.contents()
}

fn lines_at(output: &str, level: &str) -> usize {
    output.lines().filter(|line| line.contains(level)).count()
}

#[test]
#[serial(logging)]
fn test_off_prints_nothing() {
    assert_eq!(run_at(LogLevel::Off), "");
}

#[test]
#[serial(logging)]
fn test_warn_prints_failures_only() {
    let output = run_at(LogLevel::Warn);

    assert!(output.contains("error querying file"), "{output}");
    assert_eq!(lines_at(&output, "WARN"), output.lines().count(), "{output}");
    assert!(!output.contains("this seems to be a directory"), "{output}");
}

#[test]
#[serial(logging)]
fn test_info_adds_classification() {
    let output = run_at(LogLevel::Info);

    assert!(output.contains("this seems to be a directory"), "{output}");
    assert!(output.contains("error querying file"), "{output}");
    assert!(!output.contains("file properties"), "{output}");
    assert_eq!(lines_at(&output, "DEBUG"), 0, "{output}");
}

#[test]
#[serial(logging)]
fn test_debug_adds_selection_details() {
    let output = run_at(LogLevel::Debug);

    assert!(output.contains("auth"), "{output}");
    assert!(output.contains("file properties"), "{output}");
    assert!(output.contains("this seems to be a directory"), "{output}");
    assert!(!output.contains("> locate"), "{output}");
    assert_eq!(lines_at(&output, "TRACE"), 0, "{output}");
}

#[test]
#[serial(logging)]
fn test_trace_adds_entry_and_exit() {
    let output = run_at(LogLevel::Trace);

    for marker in [
        "> init_context",
        "< init_context",
        "> locate",
        "< locate",
        "> stage",
        "< stage",
        "> end_context",
    ] {
        assert!(output.contains(marker), "missing {marker:?} in {output}");
    }
    assert!(output.contains("file properties"), "{output}");
    assert!(output.contains("error querying file"), "{output}");
}
