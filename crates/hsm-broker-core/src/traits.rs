// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::Path;

use crate::attributes::FileAttributes;
use crate::auth::AuthMechanism;
use crate::status::HsmStatus;

/// Handle of a file opened through [`HsmClient::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileHandle(pub i32);

/// POSIX open flags passed to [`HsmClient::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenFlags(pub i32);

impl OpenFlags {
    /// Read-only, non-blocking open used before a recall.
    #[cfg(unix)]
    pub const READ_ONLY_NONBLOCK: OpenFlags = OpenFlags(libc::O_RDONLY | libc::O_NONBLOCK);

    /// Read-only, non-blocking open used before a recall.
    #[cfg(not(unix))]
    pub const READ_ONLY_NONBLOCK: OpenFlags = OpenFlags(0o4000);

    /// Returns `true` when the flags request read-only access.
    #[cfg(unix)]
    pub fn is_read_only(&self) -> bool {
        self.0 & libc::O_ACCMODE == libc::O_RDONLY
    }

    /// Returns `true` when the flags request read-only access.
    #[cfg(not(unix))]
    pub fn is_read_only(&self) -> bool {
        self.0 & 0o3 == 0
    }
}

/// A volume descriptor returned by an attribute query.
///
/// Descriptors may own buffers allocated by the native client; they are
/// handed back through [`HsmClient::release_volume`].
pub trait VolumeDescriptor {
    /// Virtual volume identifier.
    fn volume_id(&self) -> u64;

    /// Relative position of the file on the volume.
    fn rel_position(&self) -> i32;

    /// Label of the first physical volume, if the list is present.
    fn first_tape_label(&self) -> Option<&str>;
}

/// Capability interface over the HSM client library.
///
/// Every call blocks until the HSM answers. Failures carry the raw status
/// code, which the broker propagates unmodified.
pub trait HsmClient {
    /// Volume descriptor type handed out by [`HsmClient::file_get_xattributes`].
    type Volume: VolumeDescriptor;

    /// Establishes login credentials for the process.
    fn set_login_cred(
        &self,
        principal: &str,
        mechanism: AuthMechanism,
        keytab: &Path,
    ) -> Result<(), HsmStatus>;

    /// Drops the credentials established by [`HsmClient::set_login_cred`].
    fn purge_login_cred(&self) -> Result<(), HsmStatus>;

    /// Queries the attributes of `name` across all storage tiers at once.
    fn file_get_xattributes(
        &self,
        name: &str,
    ) -> Result<FileAttributes<Self::Volume>, HsmStatus>;

    /// Releases the native buffers held by a volume descriptor.
    ///
    /// Called exactly once for every volume returned by
    /// [`HsmClient::file_get_xattributes`].
    fn release_volume(&self, volume: Self::Volume);

    /// Opens `name` in the HSM namespace.
    fn open(&self, name: &str, flags: OpenFlags) -> Result<FileHandle, HsmStatus>;

    /// Recalls `length` bytes starting at `offset` into `storage_level`.
    ///
    /// Stages the whole window and returns once the HSM accepts the request,
    /// so successive calls reach the HSM in call order.
    fn stage(
        &self,
        handle: FileHandle,
        offset: u64,
        length: u64,
        storage_level: u32,
    ) -> Result<(), HsmStatus>;

    /// Closes a handle returned by [`HsmClient::open`].
    fn close(&self, handle: FileHandle) -> Result<(), HsmStatus>;
}

impl<T: HsmClient + ?Sized> HsmClient for &T {
    type Volume = T::Volume;

    fn set_login_cred(
        &self,
        principal: &str,
        mechanism: AuthMechanism,
        keytab: &Path,
    ) -> Result<(), HsmStatus> {
        (**self).set_login_cred(principal, mechanism, keytab)
    }

    fn purge_login_cred(&self) -> Result<(), HsmStatus> {
        (**self).purge_login_cred()
    }

    fn file_get_xattributes(
        &self,
        name: &str,
    ) -> Result<FileAttributes<Self::Volume>, HsmStatus> {
        (**self).file_get_xattributes(name)
    }

    fn release_volume(&self, volume: Self::Volume) {
        (**self).release_volume(volume)
    }

    fn open(&self, name: &str, flags: OpenFlags) -> Result<FileHandle, HsmStatus> {
        (**self).open(name, flags)
    }

    fn stage(
        &self,
        handle: FileHandle,
        offset: u64,
        length: u64,
        storage_level: u32,
    ) -> Result<(), HsmStatus> {
        (**self).stage(handle, offset, length, storage_level)
    }

    fn close(&self, handle: FileHandle) -> Result<(), HsmStatus> {
        (**self).close(handle)
    }
}
