// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use hsm_broker_core::{
    AuthMechanism, FileAttributes, FileHandle, HsmClient, HsmStatus, ObjectType, OpenFlags,
    TierAttributes, VolumeDescriptor,
};

/// Configurable behavior for [`MockHsmClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockHsmClientBehaviour {
    /// Every call succeeds.
    None,
    /// `set_login_cred` fails with the given status.
    FailLogin(HsmStatus),
    /// `purge_login_cred` fails with the given status.
    FailLogout(HsmStatus),
    /// `file_get_xattributes` fails with the given status.
    FailQuery(HsmStatus),
    /// `open` fails with the given status.
    FailOpen(HsmStatus),
    /// `stage` fails with the given status.
    FailStage(HsmStatus),
    /// `close` fails with the given status.
    FailClose(HsmStatus),
    /// `stage` and `close` both fail.
    FailStageAndClose(HsmStatus, HsmStatus),
    /// `stage` panics after recording the call.
    PanicOnStage,
}

/// A call received by [`MockHsmClient`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HsmCall {
    /// `set_login_cred`.
    SetLoginCred {
        /// Principal.
        principal: String,
        /// Mechanism.
        mechanism: AuthMechanism,
        /// Keytab path.
        keytab: PathBuf,
    },
    /// `purge_login_cred`.
    PurgeLoginCred,
    /// `file_get_xattributes` for a file name.
    FileGetXAttributes(String),
    /// `release_volume` for a volume id.
    ReleaseVolume(u64),
    /// `open`.
    Open {
        /// File name.
        name: String,
        /// Flags.
        flags: OpenFlags,
    },
    /// `stage`, with the file name the handle was opened for.
    Stage {
        /// File name.
        name: String,
        /// Window start.
        offset: u64,
        /// Window length.
        length: u64,
        /// Target tier.
        storage_level: u32,
    },
    /// `close`, with the file name the handle was opened for.
    Close(String),
}

/// Volume descriptor handed out by [`MockHsmClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockVolume {
    /// Volume id.
    pub id: u64,
    /// Relative position on the volume.
    pub rel_position: i32,
    /// First physical volume label.
    pub tape_label: Option<String>,
    /// Reading the label panics.
    pub unreadable: bool,
}

impl MockVolume {
    /// A labelled volume.
    pub fn new(id: u64, tape_label: &str, rel_position: i32) -> Self {
        Self {
            id,
            rel_position,
            tape_label: Some(tape_label.into()),
            unreadable: false,
        }
    }

    /// A volume whose physical volume list is absent.
    pub fn unlabelled(id: u64, rel_position: i32) -> Self {
        Self {
            id,
            rel_position,
            tape_label: None,
            unreadable: false,
        }
    }

    /// A volume whose label read panics, as a faulting native buffer would.
    pub fn unreadable(id: u64) -> Self {
        Self {
            id,
            rel_position: 0,
            tape_label: None,
            unreadable: true,
        }
    }
}

impl VolumeDescriptor for MockVolume {
    fn volume_id(&self) -> u64 {
        self.id
    }

    fn rel_position(&self) -> i32 {
        self.rel_position
    }

    fn first_tape_label(&self) -> Option<&str> {
        if self.unreadable {
            panic!("volume {} is unreadable", self.id);
        }

        self.tape_label.as_deref()
    }
}

/// Attributes of a plain file with the given tiers.
pub fn file(tiers: Vec<TierAttributes<MockVolume>>) -> FileAttributes<MockVolume> {
    FileAttributes {
        object_type: ObjectType::File,
        tiers,
    }
}

/// Attributes of a directory: no segment at any tier.
pub fn directory() -> FileAttributes<MockVolume> {
    FileAttributes {
        object_type: ObjectType::Directory,
        tiers: Vec::new(),
    }
}

/// A tape tier holding `bytes` on one labelled volume.
pub fn tape_tier(id: u64, tape_label: &str, bytes: u64, rel_position: i32) -> TierAttributes<MockVolume> {
    TierAttributes::present(bytes, vec![MockVolume::new(id, tape_label, rel_position)])
}

#[derive(Debug, Default)]
struct MockState {
    files: HashMap<String, FileAttributes<MockVolume>>,
    calls: Vec<HsmCall>,
    open_handles: HashMap<i32, String>,
    next_handle: i32,
    acquired_volumes: usize,
    released_volumes: usize,
}

/// Mock HSM client for testing.
///
/// Serves attributes registered with [`MockHsmClient::with_file`], records
/// every call, and counts volume descriptors handed out and released.
/// Unknown file names fail with [`HsmStatus::ENOENT`].
#[derive(Debug)]
pub struct MockHsmClient {
    behaviour: MockHsmClientBehaviour,
    state: Mutex<MockState>,
}

impl MockHsmClient {
    /// Creates a new mock client with the specified behavior.
    pub fn new(behaviour: MockHsmClientBehaviour) -> Self {
        Self {
            behaviour,
            state: Mutex::new(MockState::default()),
        }
    }

    /// Registers the attributes returned for `name`.
    pub fn with_file(self, name: &str, attributes: FileAttributes<MockVolume>) -> Self {
        self.state().files.insert(name.into(), attributes);
        self
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockHsmClientBehaviour) {
        self.behaviour = behaviour;
    }

    /// Calls received so far.
    pub fn calls(&self) -> Vec<HsmCall> {
        self.state().calls.clone()
    }

    /// Forgets the recorded calls.
    pub fn reset_calls(&self) {
        self.state().calls.clear();
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    /// Volume descriptors handed out and not yet released.
    pub fn outstanding_volumes(&self) -> usize {
        let state = self.state();
        state.acquired_volumes - state.released_volumes
    }

    /// Volume descriptors handed out so far.
    pub fn acquired_volumes(&self) -> usize {
        self.state().acquired_volumes
    }

    /// Handles opened and not yet closed.
    pub fn open_handles(&self) -> usize {
        self.state().open_handles.len()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HsmClient for MockHsmClient {
    type Volume = MockVolume;

    fn set_login_cred(
        &self,
        principal: &str,
        mechanism: AuthMechanism,
        keytab: &Path,
    ) -> Result<(), HsmStatus> {
        self.state().calls.push(HsmCall::SetLoginCred {
            principal: principal.into(),
            mechanism,
            keytab: keytab.to_path_buf(),
        });

        match self.behaviour {
            MockHsmClientBehaviour::FailLogin(status) => Err(status),
            _ => Ok(()),
        }
    }

    fn purge_login_cred(&self) -> Result<(), HsmStatus> {
        self.state().calls.push(HsmCall::PurgeLoginCred);

        match self.behaviour {
            MockHsmClientBehaviour::FailLogout(status) => Err(status),
            _ => Ok(()),
        }
    }

    fn file_get_xattributes(
        &self,
        name: &str,
    ) -> Result<FileAttributes<MockVolume>, HsmStatus> {
        let mut state = self.state();
        state.calls.push(HsmCall::FileGetXAttributes(name.into()));

        if let MockHsmClientBehaviour::FailQuery(status) = self.behaviour {
            return Err(status);
        }

        let attributes = state.files.get(name).cloned().ok_or(HsmStatus::ENOENT)?;
        state.acquired_volumes += attributes
            .tiers
            .iter()
            .map(|tier| tier.volumes.len())
            .sum::<usize>();

        Ok(attributes)
    }

    fn release_volume(&self, volume: MockVolume) {
        let mut state = self.state();
        state.calls.push(HsmCall::ReleaseVolume(volume.id));
        state.released_volumes += 1;
    }

    fn open(&self, name: &str, flags: OpenFlags) -> Result<FileHandle, HsmStatus> {
        let mut state = self.state();
        state.calls.push(HsmCall::Open {
            name: name.into(),
            flags,
        });

        if let MockHsmClientBehaviour::FailOpen(status) = self.behaviour {
            return Err(status);
        }

        let handle = state.next_handle;
        state.next_handle += 1;
        state.open_handles.insert(handle, name.into());

        Ok(FileHandle(handle))
    }

    fn stage(
        &self,
        handle: FileHandle,
        offset: u64,
        length: u64,
        storage_level: u32,
    ) -> Result<(), HsmStatus> {
        let mut state = self.state();
        let name = state
            .open_handles
            .get(&handle.0)
            .cloned()
            .ok_or(HsmStatus::EBADF)?;
        state.calls.push(HsmCall::Stage {
            name,
            offset,
            length,
            storage_level,
        });
        drop(state);

        match self.behaviour {
            MockHsmClientBehaviour::FailStage(status)
            | MockHsmClientBehaviour::FailStageAndClose(status, _) => Err(status),
            MockHsmClientBehaviour::PanicOnStage => panic!("stage aborted"),
            _ => Ok(()),
        }
    }

    fn close(&self, handle: FileHandle) -> Result<(), HsmStatus> {
        let mut state = self.state();
        let name = state
            .open_handles
            .remove(&handle.0)
            .ok_or(HsmStatus::EBADF)?;
        state.calls.push(HsmCall::Close(name));

        match self.behaviour {
            MockHsmClientBehaviour::FailClose(status)
            | MockHsmClientBehaviour::FailStageAndClose(_, status) => Err(status),
            _ => Ok(()),
        }
    }
}
