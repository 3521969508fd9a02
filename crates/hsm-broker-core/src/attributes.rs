// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw per-tier attributes returned by an all-levels query.

/// Number of storage tiers the HSM reports attributes for.
pub const MAX_TIERS: usize = 5;

/// Segment flags of one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TierFlags(pub u32);

impl TierFlags {
    /// Data for the file exists at this tier.
    pub const DATA_EXISTS_AT_LEVEL: TierFlags = TierFlags(0x0000_0001);

    /// The tier is a disk level.
    pub const LEVEL_IS_DISK: TierFlags = TierFlags(0x0000_0002);

    /// The tier is a tape level.
    pub const LEVEL_IS_TAPE: TierFlags = TierFlags(0x0000_0004);

    /// No flag set.
    pub const EMPTY: TierFlags = TierFlags(0);

    /// Returns `true` when no segment flag is set for the tier.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` when every bit of `other` is set.
    pub fn contains(&self, other: TierFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` when the data-exists bit is set.
    pub fn data_exists(&self) -> bool {
        self.contains(Self::DATA_EXISTS_AT_LEVEL)
    }
}

impl core::ops::BitOr for TierFlags {
    type Output = TierFlags;

    fn bitor(self, rhs: TierFlags) -> TierFlags {
        TierFlags(self.0 | rhs.0)
    }
}

/// Kind of namespace object the attributes belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    SymLink,
    /// Type code the broker does not know.
    Other(u32),
}

impl ObjectType {
    /// Returns `true` for a plain file.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }
}

/// Attributes of one storage tier.
#[derive(Debug, Clone)]
pub struct TierAttributes<V> {
    /// Segment flags.
    pub flags: TierFlags,
    /// Bytes of the file held at this tier.
    pub bytes_at_level: u64,
    /// Volume descriptors; each owns native buffers until released.
    pub volumes: Vec<V>,
}

impl<V> TierAttributes<V> {
    /// A tier with no segment flags and no volumes.
    pub fn absent() -> Self {
        Self {
            flags: TierFlags::EMPTY,
            bytes_at_level: 0,
            volumes: Vec::new(),
        }
    }

    /// A tier with segment `flags` but no data for the file, such as a disk
    /// level the file was purged from.
    pub fn without_data(flags: TierFlags) -> Self {
        Self {
            flags,
            bytes_at_level: 0,
            volumes: Vec::new(),
        }
    }

    /// A tier holding `bytes` of the file on `volumes`.
    pub fn present(bytes: u64, volumes: Vec<V>) -> Self {
        Self {
            flags: TierFlags::DATA_EXISTS_AT_LEVEL,
            bytes_at_level: bytes,
            volumes,
        }
    }
}

/// Result of an all-levels attribute query.
///
/// Tiers beyond the end of `tiers` are treated as absent. Entries past
/// [`MAX_TIERS`] are never selected but their volumes are still released.
#[derive(Debug, Clone)]
pub struct FileAttributes<V> {
    /// Namespace object type.
    pub object_type: ObjectType,
    /// Per-tier attributes, fastest tier first.
    pub tiers: Vec<TierAttributes<V>>,
}
