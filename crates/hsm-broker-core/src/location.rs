// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::Range;

/// Tape label reported for a file resident in the disk tier.
pub const DISK_LABEL: &str = "DISK";

/// Tape label associated with a file that has no resolvable segment.
pub const EMPTY_LABEL: &str = "EMPTY";

/// Position reported for a file resident in the disk tier.
pub const DISK_POSITION: i32 = -1;

/// Canonical location of a file across the storage tiers.
///
/// Produced fresh by every query and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocationRecord {
    /// Fastest tier holding the file. `0` is the disk cache.
    pub tier: u32,
    /// Tape label, or [`DISK_LABEL`] when `tier == 0`.
    pub tape: String,
    /// File length in bytes at the resolved tier.
    pub size: u64,
    /// Relative position on the tape, or [`DISK_POSITION`] when `tier == 0`.
    pub position: i32,
}

impl StorageLocationRecord {
    /// Record for a file already resident in the disk tier.
    pub fn on_disk(size: u64) -> Self {
        Self {
            tier: 0,
            tape: DISK_LABEL.into(),
            size,
            position: DISK_POSITION,
        }
    }

    /// Record for a file resolved at a tape tier.
    pub fn on_tape(tier: u32, tape: impl Into<String>, size: u64, position: i32) -> Self {
        Self {
            tier,
            tape: tape.into(),
            size,
            position,
        }
    }

    /// Returns `true` when the file is resident in the disk tier.
    pub fn is_on_disk(&self) -> bool {
        self.tier == 0
    }

    /// Returns `true` when a recall is needed before the file is readable
    /// from the disk tier.
    pub fn needs_stage(&self) -> bool {
        !self.is_on_disk()
    }
}

/// Input of a stage operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRequest {
    /// Name of the file in the HSM namespace.
    pub file_name: String,
    /// Declared file length, upper bound of the recall window.
    pub length: u64,
}

impl StageRequest {
    /// Creates a request recalling `length` bytes of `file_name`.
    pub fn new(file_name: impl Into<String>, length: u64) -> Self {
        Self {
            file_name: file_name.into(),
            length,
        }
    }

    /// Creates a request for a file located by a previous query.
    pub fn for_record(file_name: impl Into<String>, record: &StorageLocationRecord) -> Self {
        Self::new(file_name, record.size)
    }

    /// Byte window covered by the recall.
    pub fn window(&self) -> Range<u64> {
        0..self.length
    }
}
