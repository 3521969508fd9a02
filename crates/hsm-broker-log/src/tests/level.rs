// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serial_test::serial;
use tracing::level_filters::LevelFilter;

use crate::level::{LOG_ENV_VAR, LogLevel};

const TEST_VAR: &str = "HSM_BROKER_LOG_TEST_LEVEL";

// =============================================================================
// parse()
// =============================================================================

#[test]
fn test_parse_recognized_levels() {
    assert_eq!(LogLevel::parse("TRACE"), LogLevel::Trace);
    assert_eq!(LogLevel::parse("DEBUG"), LogLevel::Debug);
    assert_eq!(LogLevel::parse("INFO"), LogLevel::Info);
    assert_eq!(LogLevel::parse("WARN"), LogLevel::Warn);
}

#[test]
fn test_parse_unrecognized_is_off() {
    assert_eq!(LogLevel::parse(""), LogLevel::Off);
    assert_eq!(LogLevel::parse("ERROR"), LogLevel::Off);
    assert_eq!(LogLevel::parse("trace"), LogLevel::Off);
    assert_eq!(LogLevel::parse(" DEBUG"), LogLevel::Off);
}

// =============================================================================
// enables()
// =============================================================================

#[test]
fn test_finer_level_enables_coarser() {
    assert!(LogLevel::Trace.enables(LogLevel::Debug));
    assert!(LogLevel::Trace.enables(LogLevel::Warn));
    assert!(LogLevel::Debug.enables(LogLevel::Info));
    assert!(LogLevel::Warn.enables(LogLevel::Warn));
}

#[test]
fn test_coarser_level_does_not_enable_finer() {
    assert!(!LogLevel::Warn.enables(LogLevel::Info));
    assert!(!LogLevel::Info.enables(LogLevel::Debug));
    assert!(!LogLevel::Debug.enables(LogLevel::Trace));
}

#[test]
fn test_off_enables_nothing() {
    for level in [
        LogLevel::Off,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        assert!(!LogLevel::Off.enables(level));
        assert!(!level.enables(LogLevel::Off));
    }
}

#[test]
fn test_level_filter_mapping() {
    assert_eq!(LogLevel::Off.as_level_filter(), LevelFilter::OFF);
    assert_eq!(LogLevel::Warn.as_level_filter(), LevelFilter::WARN);
    assert_eq!(LogLevel::Trace.as_level_filter(), LevelFilter::TRACE);
}

#[test]
fn test_display() {
    assert_eq!(LogLevel::Off.to_string(), "OFF");
    assert_eq!(LogLevel::Info.to_string(), "INFO");
}

// =============================================================================
// environment
// =============================================================================

#[test]
#[serial(env)]
fn test_from_env_var_reads_value() {
    unsafe { std::env::set_var(TEST_VAR, "DEBUG") };
    assert_eq!(LogLevel::from_env_var(TEST_VAR), LogLevel::Debug);

    unsafe { std::env::set_var(TEST_VAR, "verbose") };
    assert_eq!(LogLevel::from_env_var(TEST_VAR), LogLevel::Off);

    unsafe { std::env::remove_var(TEST_VAR) };
    assert_eq!(LogLevel::from_env_var(TEST_VAR), LogLevel::Off);
}

#[test]
#[serial(env)]
fn test_current_is_read_once() {
    let first = LogLevel::current();

    let previous = std::env::var(LOG_ENV_VAR).ok();
    let other = if first == LogLevel::Trace { "WARN" } else { "TRACE" };
    unsafe { std::env::set_var(LOG_ENV_VAR, other) };

    assert_eq!(LogLevel::current(), first);

    match previous {
        Some(value) => unsafe { std::env::set_var(LOG_ENV_VAR, value) },
        None => unsafe { std::env::remove_var(LOG_ENV_VAR) },
    }
}
