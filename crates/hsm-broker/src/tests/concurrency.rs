// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::thread;

use hsm_broker_core::{StorageLocationRecord, TierAttributes, TierFlags};

use super::utils::{active_broker, mock};
use crate::support::test_utils::{HsmCall, file, tape_tier};

const THREADS: u64 = 8;

fn name(i: u64) -> String {
    format!("/hpss/in2p3.fr/group/run{i:03}.root")
}

#[test]
fn test_concurrent_locate() {
    let client = (0..THREADS).fold(mock(), |client, i| {
        client.with_file(
            &name(i),
            file(vec![
                TierAttributes::without_data(TierFlags::LEVEL_IS_DISK),
                tape_tier(i, &format!("IT{i:04}"), 100 + i, i as i32),
            ]),
        )
    });
    let broker = active_broker(client);

    let records: Vec<StorageLocationRecord> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let broker = &broker;
                s.spawn(move || broker.locate(&name(i)).expect("Failed to locate(..)"))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("Failed to join thread"))
            .collect()
    });

    for (i, record) in (0..THREADS).zip(records) {
        assert_eq!(
            record,
            StorageLocationRecord::on_tape(1, format!("IT{i:04}"), 100 + i, i as i32)
        );
    }
    assert_eq!(broker.client().outstanding_volumes(), 0);
}

#[test]
fn test_concurrent_stage_submits_every_request_once() {
    let broker = active_broker(mock());

    thread::scope(|s| {
        for i in 0..THREADS {
            let broker = &broker;
            s.spawn(move || broker.stage(&name(i), i).expect("Failed to stage(..)"));
        }
    });

    let calls = broker.client().calls();
    for i in 0..THREADS {
        let file_name = name(i);
        let stages = calls
            .iter()
            .filter(|call| matches!(call, HsmCall::Stage { name, .. } if *name == file_name))
            .count();
        assert_eq!(stages, 1, "{file_name}");
    }
    assert_eq!(broker.client().open_handles(), 0);
}
