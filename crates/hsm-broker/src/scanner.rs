// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Attribute scanner.
//!
//! Reduces the per-tier attributes of an all-levels query to one
//! [`StorageLocationRecord`]:
//!
//! 1. Tier 0 without any segment flag classifies the object:
//!    [`LocateError::NoSegments`] for a plain file,
//!    [`LocateError::IsDirectory`] otherwise.
//! 2. The first tier, in ascending order, with data present is the resolved
//!    tier. Its byte count, first volume position and first volume label are
//!    kept; later tiers never override them.
//! 3. A file resolved at tier 0 is reported as `"DISK"` at position `-1`,
//!    whatever volumes the disk tier lists. A tape tier must provide a
//!    labelled volume with a non-negative position.
//! 4. No resolved tier means [`LocateError::EmptyFile`].
//!
//! Every volume descriptor returned by the query is released before the scan
//! returns, whatever the outcome.

use hsm_broker_core::{
    FileAttributes, HsmClient, LocateError, MAX_TIERS, StorageLocationRecord, VolumeDescriptor,
};
use tracing::{debug, info, trace, warn};

use crate::guard::TierGuard;

pub(crate) fn locate<C: HsmClient>(
    client: &C,
    file_name: &str,
) -> Result<StorageLocationRecord, LocateError> {
    trace!(file = file_name, "> locate");

    let result = client
        .file_get_xattributes(file_name)
        .map_err(LocateError::QueryFailed)
        .and_then(|attributes| reduce(client, attributes));

    match &result {
        Ok(record) => debug!(
            file = file_name,
            position = record.position,
            tier = record.tier,
            tape = %record.tape,
            size = record.size,
            "file properties"
        ),
        Err(e) => warn!(file = file_name, error = %e, "error querying file"),
    }

    trace!(ok = result.is_ok(), "< locate");

    result
}

pub(crate) fn reduce<C: HsmClient>(
    client: &C,
    attributes: FileAttributes<C::Volume>,
) -> Result<StorageLocationRecord, LocateError> {
    let FileAttributes { object_type, tiers } = attributes;

    // Every tier is guarded before any classification, so that an early
    // return releases the volumes of the tiers not yet visited.
    let mut tiers = tiers
        .into_iter()
        .map(|tier| TierGuard::new(client, tier))
        .collect::<Vec<_>>()
        .into_iter();

    let mut resolved: Option<StorageLocationRecord> = None;

    for level in 0..MAX_TIERS {
        let tier = tiers.next().unwrap_or_else(|| TierGuard::absent(client));

        if level == 0 && tier.flags().is_empty() {
            if object_type.is_file() {
                warn!("no segments exist for this file");
                return Err(LocateError::NoSegments);
            }

            info!(?object_type, "this seems to be a directory");
            return Err(LocateError::IsDirectory);
        }

        if resolved.is_none() && tier.flags().data_exists() {
            resolved = Some(resolve(level, &tier)?);
        }

        // `tier` dropped here: its volumes go back to the client.
    }

    resolved.ok_or_else(|| {
        info!("no tier holds data, file is empty");
        LocateError::EmptyFile
    })
}

fn resolve<C: HsmClient>(
    level: usize,
    tier: &TierGuard<'_, C>,
) -> Result<StorageLocationRecord, LocateError> {
    let size = tier.bytes_at_level();

    if level == 0 {
        return Ok(StorageLocationRecord::on_disk(size));
    }

    let tier_index = level as u32;
    let volume = tier
        .first_volume()
        .ok_or(LocateError::MissingVolume { tier: tier_index })?;
    let tape = volume
        .first_tape_label()
        .ok_or(LocateError::MissingVolume { tier: tier_index })?;

    let position = volume.rel_position();
    if position < 0 {
        return Err(LocateError::MissingVolume { tier: tier_index });
    }

    Ok(StorageLocationRecord::on_tape(tier_index, tape, size, position))
}
