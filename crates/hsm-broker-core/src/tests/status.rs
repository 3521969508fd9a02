// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::status::{HsmStatus, StatusKind};

#[test]
fn test_known_codes_have_names() {
    assert_eq!(HsmStatus::EISDIR.name(), Some("EISDIR"));
    assert_eq!(HsmStatus::ENOENT.name(), Some("ENOENT"));
    assert_eq!(HsmStatus(-21).name(), Some("EISDIR"));
    assert_eq!(HsmStatus(-12345).name(), None);
}

#[test]
fn test_display_includes_raw_code() {
    assert_eq!(HsmStatus::EIO.to_string(), "EIO (-5)");
    assert_eq!(HsmStatus(-30000).to_string(), "-30000");
}

#[test]
fn test_kind_classification() {
    assert_eq!(HsmStatus::EPERM.kind(), StatusKind::CredentialRejected);
    assert_eq!(HsmStatus::ENOENT.kind(), StatusKind::NotFound);
    assert_eq!(HsmStatus::EACCES.kind(), StatusKind::AccessDenied);
    assert_eq!(HsmStatus::EIO.kind(), StatusKind::Unavailable);
    assert_eq!(HsmStatus::EISDIR.kind(), StatusKind::IsDirectory);
    assert_eq!(HsmStatus::ENOSPACE.kind(), StatusKind::NoSpace);
    assert_eq!(HsmStatus::ETIMEDOUT.kind(), StatusKind::Other);
}

#[test]
fn test_code_roundtrips_unmodified() {
    let status = HsmStatus::from(-77);

    assert_eq!(status.code(), -77);
    assert!(!status.is_ok());
    assert!(HsmStatus::NOERROR.is_ok());
}
