// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::auth::AuthMechanism;

#[test]
fn test_from_name_recognized() {
    assert_eq!(AuthMechanism::from_name("unix"), AuthMechanism::Unix);
    assert_eq!(AuthMechanism::from_name("kerberos"), AuthMechanism::Kerberos);
}

#[test]
fn test_from_name_falls_back_to_unix() {
    assert_eq!(AuthMechanism::from_name("ntlm"), AuthMechanism::Unix);
    assert_eq!(AuthMechanism::from_name(""), AuthMechanism::Unix);
    // Case-sensitive
    assert_eq!(AuthMechanism::from_name("Kerberos"), AuthMechanism::Unix);
    assert_eq!(AuthMechanism::from_name("KERBEROS"), AuthMechanism::Unix);
}

#[test]
fn test_is_recognized() {
    assert!(AuthMechanism::is_recognized("unix"));
    assert!(AuthMechanism::is_recognized("kerberos"));
    assert!(!AuthMechanism::is_recognized("ntlm"));
}

#[test]
fn test_display_matches_name() {
    assert_eq!(AuthMechanism::Kerberos.to_string(), "kerberos");
    assert_eq!(AuthMechanism::default().to_string(), "unix");
}
