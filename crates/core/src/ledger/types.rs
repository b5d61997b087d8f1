//! Journal domain types.
//!
//! These are read-side records: the report generators consume them as the
//! store hands them over and never mutate them. Amounts are unsigned
//! debit/credit columns; signing happens later, per account category.

use chrono::NaiveDate;
use quanso_shared::types::{
    CounterpartyId, JournalEntryId, JournalEntryLineId, SourceDocumentId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a journal entry.
///
/// Only posted entries participate in balances and reports; drafts are
/// invisible to every generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Entry is being drafted and does not affect any balance.
    Draft,
    /// Entry has been posted to the ledger (immutable).
    Posted,
}

impl EntryStatus {
    /// Returns true if the entry counts toward balances.
    #[must_use]
    pub fn is_posted(&self) -> bool {
        matches!(self, Self::Posted)
    }
}

/// A journal entry header.
///
/// Line amounts live in [`JournalEntryLine`]; the header carries the
/// pre-summed totals the store keeps alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique entry identifier.
    pub id: JournalEntryId,
    /// The date the entry takes effect.
    pub entry_date: NaiveDate,
    /// Human-readable description.
    pub description: String,
    /// Lifecycle status.
    pub status: EntryStatus,
    /// Sum of all line debits.
    pub total_debit: Decimal,
    /// Sum of all line credits.
    pub total_credit: Decimal,
}

impl JournalEntry {
    /// Returns true if total debits equal total credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total_debit == self.total_credit
    }
}

/// The kind of source document a line originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceDocumentKind {
    /// Sales invoice.
    Invoice,
    /// Over-the-counter sales receipt.
    SalesReceipt,
    /// Credit memo issued to a customer.
    CreditMemo,
    /// Vendor bill.
    Bill,
    /// Employee expense claim.
    ExpenseClaim,
}

/// Reference from a journal line back to the document that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// The originating document's identifier.
    pub id: SourceDocumentId,
    /// What kind of document it is.
    pub kind: SourceDocumentKind,
}

/// A single debit/credit line of a journal entry.
///
/// Exactly one of `debit` and `credit` is nonzero on a well-formed line,
/// but the generators tolerate lines carrying both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntryLine {
    /// Unique line identifier.
    pub id: JournalEntryLineId,
    /// The entry this line belongs to.
    pub entry_id: JournalEntryId,
    /// Account code the line posts to.
    pub account_code: String,
    /// Account display name as recorded on the line.
    pub account_name: String,
    /// Debit amount (zero when the line is a credit).
    pub debit: Decimal,
    /// Credit amount (zero when the line is a debit).
    pub credit: Decimal,
    /// The document the line was generated from, when known.
    pub source: Option<SourceDocument>,
}

/// Which side of the business a counterparty transaction sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Customer-facing revenue transactions.
    Sales,
    /// Supplier-facing expenditure transactions.
    Expenses,
}

/// One counterparty-attributed transaction, as the store reports it.
///
/// This is the raw material for ranking analysis; amounts are always
/// positive regardless of kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// The counterparty the amount is attributed to.
    pub counterparty_id: CounterpartyId,
    /// Transaction amount (positive).
    pub amount: Decimal,
    /// Transaction date.
    pub date: NaiveDate,
    /// The document kind that recorded the transaction.
    pub document: SourceDocumentKind,
}

/// Display information for a counterparty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartyInfo {
    /// Counterparty display name.
    pub name: String,
    /// Short code assigned by the books.
    pub code: String,
    /// Contact detail (phone or email), when recorded.
    pub contact: Option<String>,
}
