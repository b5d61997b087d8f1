//! Read-side store abstraction.
//!
//! Every generator reaches the books through [`LedgerStore`]. The trait is
//! read-only: generators never write, and a store failure surfaces as
//! [`StoreError`] for the caller to map into its own error taxonomy.

use std::collections::HashMap;

use chrono::NaiveDate;
use quanso_shared::types::{CounterpartyId, JournalEntryId};
use thiserror::Error;

use super::types::{
    CounterpartyInfo, JournalEntry, JournalEntryLine, RawTransaction, TransactionKind,
};

/// Errors a ledger store can raise.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or the query failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store returned data the reader could not interpret.
    #[error("malformed store data: {0}")]
    Malformed(String),
}

impl From<StoreError> for quanso_shared::AppError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

/// Read access to the posted books.
///
/// Implementations must be cheap to call repeatedly: generators issue a
/// small, fixed number of coarse queries per report rather than one query
/// per account.
#[async_trait::async_trait]
pub trait LedgerStore: Send + Sync {
    /// Lists posted journal entries whose entry date falls within the
    /// given bounds. Both bounds are inclusive; `None` leaves that side
    /// open. Draft entries are never returned.
    async fn list_posted_entries(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<JournalEntry>, StoreError>;

    /// Lists every line belonging to the given entries.
    ///
    /// An empty id slice yields an empty result without touching the
    /// backing store.
    async fn list_lines_for_entries(
        &self,
        entry_ids: &[JournalEntryId],
    ) -> Result<Vec<JournalEntryLine>, StoreError>;

    /// Lists counterparty transactions of one kind within a period (both
    /// bounds inclusive).
    async fn list_transactions(
        &self,
        kind: TransactionKind,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RawTransaction>, StoreError>;

    /// Fetches display information for the given counterparties.
    ///
    /// Ids the store has no record of are absent from the returned map;
    /// that is not an error.
    async fn list_counterparty_info(
        &self,
        ids: &[CounterpartyId],
    ) -> Result<HashMap<CounterpartyId, CounterpartyInfo>, StoreError>;
}
