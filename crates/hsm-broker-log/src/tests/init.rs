// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::config::LogConfig;
use crate::error::LogError;
use crate::level::LogLevel;

#[test]
fn test_with_level() {
    assert_eq!(LogConfig::with_level(LogLevel::Info).level, LogLevel::Info);
    assert_eq!(LogConfig::default().level, LogLevel::Off);
}

#[test]
fn test_second_init_is_rejected() {
    let config = LogConfig::with_level(LogLevel::Warn);

    // The first call may race with another test installing a subscriber.
    let _ = crate::try_init(&config);

    assert_eq!(crate::try_init(&config), Err(LogError::AlreadyInitialized));

    // init() tolerates an installed subscriber
    crate::init();
}
