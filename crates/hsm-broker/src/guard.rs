// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scoped ownership of resources handed out by the HSM client.
//!
//! - [`TierGuard`] owns the volume descriptors of one tier and hands them
//!   back to the client on drop.
//! - [`HandleGuard`] owns an open file handle. [`HandleGuard::close`] reports
//!   the close status; a guard dropped without an explicit close still closes
//!   the handle.

use hsm_broker_core::{FileHandle, HsmClient, HsmStatus, OpenFlags, TierAttributes, TierFlags};
use tracing::warn;

pub(crate) struct TierGuard<'c, C: HsmClient> {
    client: &'c C,
    flags: TierFlags,
    bytes_at_level: u64,
    volumes: Vec<C::Volume>,
}

impl<'c, C: HsmClient> TierGuard<'c, C> {
    pub(crate) fn new(client: &'c C, tier: TierAttributes<C::Volume>) -> Self {
        Self {
            client,
            flags: tier.flags,
            bytes_at_level: tier.bytes_at_level,
            volumes: tier.volumes,
        }
    }

    /// Guard for a tier the query did not report.
    pub(crate) fn absent(client: &'c C) -> Self {
        Self::new(client, TierAttributes::absent())
    }

    pub(crate) fn flags(&self) -> TierFlags {
        self.flags
    }

    pub(crate) fn bytes_at_level(&self) -> u64 {
        self.bytes_at_level
    }

    pub(crate) fn first_volume(&self) -> Option<&C::Volume> {
        self.volumes.first()
    }
}

impl<C: HsmClient> Drop for TierGuard<'_, C> {
    fn drop(&mut self) {
        for volume in self.volumes.drain(..) {
            self.client.release_volume(volume);
        }
    }
}

pub(crate) struct HandleGuard<'c, C: HsmClient> {
    client: &'c C,
    handle: FileHandle,
    open: bool,
}

impl<'c, C: HsmClient> HandleGuard<'c, C> {
    pub(crate) fn open(client: &'c C, name: &str, flags: OpenFlags) -> Result<Self, HsmStatus> {
        let handle = client.open(name, flags)?;

        Ok(Self {
            client,
            handle,
            open: true,
        })
    }

    pub(crate) fn handle(&self) -> FileHandle {
        self.handle
    }

    pub(crate) fn close(mut self) -> Result<(), HsmStatus> {
        self.open = false;
        self.client.close(self.handle)
    }
}

impl<C: HsmClient> Drop for HandleGuard<'_, C> {
    fn drop(&mut self) {
        if self.open {
            self.open = false;
            if let Err(status) = self.client.close(self.handle) {
                warn!(%status, handle = self.handle.0, "failed to close handle on unwind");
            }
        }
    }
}
