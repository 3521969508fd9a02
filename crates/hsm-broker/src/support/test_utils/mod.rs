// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for the HSM client.

mod mock_hsm_client;

pub use mock_hsm_client::{
    HsmCall, MockHsmClient, MockHsmClientBehaviour, MockVolume, directory, file, tape_tier,
};
