// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use std::sync::OnceLock;

use tracing::level_filters::LevelFilter;

/// Environment variable selecting the diagnostic level.
pub const LOG_ENV_VAR: &str = "TREQS_LOG";

static CURRENT: OnceLock<LogLevel> = OnceLock::new();

/// Diagnostic verbosity, ordered from silent to most verbose.
///
/// A level shows its own messages and those of every coarser level:
/// `Trace > Debug > Info > Warn > Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// No diagnostic output.
    #[default]
    Off,
    /// Failures only.
    Warn,
    /// Classifications and failures.
    Info,
    /// Selection details.
    Debug,
    /// Entry and exit of every operation.
    Trace,
}

impl LogLevel {
    /// Parses a selector value. Unrecognized values yield [`LogLevel::Off`].
    pub fn parse(value: &str) -> Self {
        match value {
            "TRACE" => Self::Trace,
            "DEBUG" => Self::Debug,
            "INFO" => Self::Info,
            "WARN" => Self::Warn,
            _ => Self::Off,
        }
    }

    /// Reads `name` from the environment, without caching.
    pub fn from_env_var(name: &str) -> Self {
        std::env::var(name)
            .map(|value| Self::parse(&value))
            .unwrap_or(Self::Off)
    }

    /// Level selected by `TREQS_LOG` for this process.
    ///
    /// The variable is read on the first call; later changes to the
    /// environment are not observed.
    pub fn current() -> Self {
        *CURRENT.get_or_init(|| Self::from_env_var(LOG_ENV_VAR))
    }

    /// Returns `true` when messages of `level` are shown at `self`.
    pub fn enables(&self, level: LogLevel) -> bool {
        level != Self::Off && level <= *self
    }

    /// Equivalent `tracing` filter.
    pub fn as_level_filter(&self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::OFF,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }

    /// Selector value for this level; empty for [`LogLevel::Off`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("OFF"),
            level => f.write_str(level.as_str()),
        }
    }
}
