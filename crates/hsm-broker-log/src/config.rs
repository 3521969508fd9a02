// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::level::LogLevel;

/// Subscriber settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogConfig {
    /// Minimum verbosity shown.
    pub level: LogLevel,
}

impl LogConfig {
    /// Settings with the process-wide level from `TREQS_LOG`.
    pub fn from_env() -> Self {
        Self::with_level(LogLevel::current())
    }

    /// Settings at `level`.
    pub fn with_level(level: LogLevel) -> Self {
        Self { level }
    }
}
