// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::broker::Broker;
use crate::support::test_utils::{MockHsmClient, MockHsmClientBehaviour};

pub(crate) const KEYTAB: &str = "/var/hpss/etc/treqs.keytab";
pub(crate) const PRINCIPAL: &str = "treqs";

/// Broker with an established session over `client`. The login call is
/// dropped from the call log.
pub(crate) fn active_broker(client: MockHsmClient) -> Broker<MockHsmClient> {
    let mut broker = Broker::new(client);
    broker
        .init_context("unix", KEYTAB, PRINCIPAL)
        .expect("Failed to init_context(..)");
    broker.client().reset_calls();

    broker
}

pub(crate) fn mock() -> MockHsmClient {
    MockHsmClient::new(MockHsmClientBehaviour::None)
}
