//! Journal data model and store boundary.
//!
//! This module defines what the generators read:
//! - Journal entry headers and debit/credit lines
//! - Source document references attached to lines
//! - Raw counterparty transactions for ranking analysis
//! - The async read-only store trait everything is fetched through

pub mod store;
pub mod types;

pub use store::{LedgerStore, StoreError};
pub use types::{
    CounterpartyInfo, EntryStatus, JournalEntry, JournalEntryLine, RawTransaction, SourceDocument,
    SourceDocumentKind, TransactionKind,
};
