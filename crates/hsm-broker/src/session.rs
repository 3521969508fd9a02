// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::{Path, PathBuf};

use hsm_broker_core::{AuthMechanism, HsmClient, SessionError};
use tracing::{debug, trace, warn};

/// Authenticated context against the HSM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    mechanism: AuthMechanism,
    principal: String,
    keytab: PathBuf,
}

impl Session {
    /// Mechanism the credentials were established with.
    pub fn mechanism(&self) -> AuthMechanism {
        self.mechanism
    }

    /// Principal the HSM sees.
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Path of the keytab holding the credential material.
    pub fn keytab(&self) -> &Path {
        &self.keytab
    }
}

pub(crate) fn establish<C: HsmClient>(
    client: &C,
    auth_mechanism: &str,
    keytab_path: &str,
    principal: &str,
) -> Result<Session, SessionError> {
    trace!("> init_context");

    let mechanism = AuthMechanism::from_name(auth_mechanism);
    if !AuthMechanism::is_recognized(auth_mechanism) {
        debug!(requested = auth_mechanism, "unknown mechanism, falling back to unix");
    }
    debug!(%mechanism, principal, keytab = keytab_path, "auth");

    let keytab = PathBuf::from(keytab_path);
    let result = client
        .set_login_cred(principal, mechanism, &keytab)
        .map(|()| Session {
            mechanism,
            principal: principal.into(),
            keytab,
        })
        .map_err(|status| {
            warn!(%status, principal, "credentials rejected");
            SessionError::AuthFailure(status)
        });

    trace!(ok = result.is_ok(), "< init_context");

    result
}

pub(crate) fn release<C: HsmClient>(client: &C, session: Session) -> Result<(), SessionError> {
    trace!(principal = session.principal(), "> end_context");

    let result = client.purge_login_cred().map_err(|status| {
        warn!(%status, principal = session.principal(), "failed to purge credentials");
        SessionError::ReleaseFailed(status)
    });

    trace!(ok = result.is_ok(), "< end_context");

    result
}
