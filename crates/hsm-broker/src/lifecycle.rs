// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hsm_broker_core::{HsmClient, QueryError, QueryState, StageRequest, StorageLocationRecord};
use tracing::debug;

use crate::broker::Broker;

/// Lifecycle of one file: locate, then optionally stage.
///
/// Steps must follow [`QueryState`] order. A failed step is terminal: a new
/// query is needed to try again.
///
/// # Example
///
/// ```rust,ignore
/// let mut query = broker.query("/hpss/data/run42.root");
///
/// let record = query.locate()?;
/// if record.needs_stage() {
///     query.stage()?;
/// }
/// assert_eq!(query.state(), QueryState::Staged);
/// ```
pub struct FileQuery<'b, C: HsmClient> {
    broker: &'b Broker<C>,
    file_name: String,
    state: QueryState,
    record: Option<StorageLocationRecord>,
}

impl<'b, C: HsmClient> FileQuery<'b, C> {
    pub(crate) fn new(broker: &'b Broker<C>, file_name: impl Into<String>) -> Self {
        Self {
            broker,
            file_name: file_name.into(),
            state: QueryState::Unresolved,
            record: None,
        }
    }

    /// Name of the queried file.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Current state.
    pub fn state(&self) -> QueryState {
        self.state
    }

    /// Location record, once resolved.
    pub fn record(&self) -> Option<&StorageLocationRecord> {
        self.record.as_ref()
    }

    fn advance(&mut self, next: QueryState) -> Result<(), QueryError> {
        if !self.state.can_transition_to(next) {
            return Err(QueryError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }

        debug!(file = %self.file_name, from = %self.state, to = %next, "query transition");
        self.state = next;

        Ok(())
    }

    /// Resolves the location of the file.
    ///
    /// # Errors
    ///
    /// - [`QueryError::InvalidTransition`] unless the query is `Unresolved`
    /// - [`QueryError::Locate`] when the scan fails; the query is then `Errored`
    pub fn locate(&mut self) -> Result<&StorageLocationRecord, QueryError> {
        self.advance(QueryState::Scanning)?;

        match self.broker.locate(&self.file_name) {
            Ok(record) => {
                self.advance(QueryState::Resolved)?;
                Ok(&*self.record.insert(record))
            }
            Err(e) => {
                self.advance(QueryState::Errored)?;
                Err(e.into())
            }
        }
    }

    /// Recalls the resolved file, using the resolved size as the window.
    ///
    /// # Errors
    ///
    /// - [`QueryError::InvalidTransition`] unless the query is `Resolved`
    /// - [`QueryError::Stage`] when the recall fails; the query is then `StageErrored`
    pub fn stage(&mut self) -> Result<(), QueryError> {
        let request = match (&self.state, &self.record) {
            (QueryState::Resolved, Some(record)) => {
                StageRequest::for_record(self.file_name.as_str(), record)
            }
            _ => {
                return Err(QueryError::InvalidTransition {
                    from: self.state,
                    to: QueryState::Staging,
                });
            }
        };

        self.advance(QueryState::Staging)?;

        match self.broker.stage_request(&request) {
            Ok(()) => self.advance(QueryState::Staged),
            Err(e) => {
                self.advance(QueryState::StageErrored)?;
                Err(e.into())
            }
        }
    }

    /// Locates the file and stages it when it is not on the disk tier.
    ///
    /// Returns the location record. A file already on disk stays `Resolved`.
    pub fn run(&mut self) -> Result<StorageLocationRecord, QueryError> {
        let record = self.locate()?.clone();

        if record.needs_stage() {
            self.stage()?;
        }

        Ok(record)
    }
}
