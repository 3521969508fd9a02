// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Stage orchestrator.
//!
//! Opens the file read-only and non-blocking, submits one blocking recall of
//! the whole window into the disk tier, then closes the handle exactly once.
//! Callers rely on recalls reaching the HSM in call order.
//!
//! Error precedence: a failed open skips the recall; a failed recall wins
//! over a failed close; a failed close after a successful recall is reported.

use hsm_broker_core::{HsmClient, OpenFlags, StageError, StageRequest};
use tracing::{trace, warn};

use crate::guard::HandleGuard;

/// Tier recalls are staged into.
const FASTEST_TIER: u32 = 0;

pub(crate) fn stage<C: HsmClient>(client: &C, request: &StageRequest) -> Result<(), StageError> {
    let file = request.file_name.as_str();
    trace!(file, length = request.length, "> stage");

    let handle = HandleGuard::open(client, file, OpenFlags::READ_ONLY_NONBLOCK).map_err(|status| {
        warn!(file, %status, "error opening file");
        StageError::OpenFailed(status)
    })?;

    let window = request.window();
    let recall = client.stage(
        handle.handle(),
        window.start,
        window.end - window.start,
        FASTEST_TIER,
    );
    let closed = handle.close();

    let result = match (recall, closed) {
        (Err(status), closed) => {
            warn!(file, %status, "error staging file");
            if let Err(close_status) = closed {
                warn!(file, status = %close_status, "error closing file after failed stage");
            }
            Err(StageError::RecallFailed(status))
        }
        (Ok(()), Err(status)) => {
            warn!(file, %status, "error closing file");
            Err(StageError::CloseFailed(status))
        }
        (Ok(()), Ok(())) => Ok(()),
    };

    trace!(file, ok = result.is_ok(), "< stage");

    result
}
