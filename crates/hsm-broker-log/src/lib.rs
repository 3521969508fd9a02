// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hsm_broker_log
//!
//! Diagnostic output for the HSM file broker.
//!
//! The verbosity is selected by the `TREQS_LOG` environment variable, which
//! recognizes exactly `TRACE`, `DEBUG`, `INFO` and `WARN` (case-sensitive).
//! Each level also shows every coarser level. An absent or unrecognized value
//! disables diagnostic output.
//!
//! The variable is read once per process.
//!
//! ## Example
//!
//! ```rust
//! use hsm_broker_log::{LogConfig, LogLevel};
//!
//! let config = LogConfig::from_env();
//! let _ = hsm_broker_log::try_init(&config);
//!
//! assert!(LogLevel::Trace.enables(LogLevel::Warn));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod error;
mod level;

pub use config::LogConfig;
pub use error::LogError;
pub use level::{LOG_ENV_VAR, LogLevel};

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Installs the global subscriber for `config`.
///
/// # Errors
///
/// Returns [`LogError::AlreadyInitialized`] if a global subscriber is
/// already installed.
pub fn try_init(config: &LogConfig) -> Result<(), LogError> {
    tracing_subscriber::registry()
        .with(config.level.as_level_filter())
        .with(fmt::layer().with_ansi(false).with_target(false))
        .try_init()
        .map_err(|_| LogError::AlreadyInitialized)
}

/// Installs the global subscriber with the level read from `TREQS_LOG`.
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let config = LogConfig::from_env();

    if try_init(&config).is_err() {
        tracing::debug!("subscriber already installed, keeping it");
    }
}
