//! Seedable in-memory ledger.
//!
//! Built once through [`MemoryLedgerBuilder`] and read-only afterwards,
//! matching the snapshot semantics every generator assumes. The builder
//! computes entry totals from the lines it is given; it does not enforce
//! the double-entry law, so tests can also seed deliberately broken books.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use quanso_core::ledger::{
    CounterpartyInfo, EntryStatus, JournalEntry, JournalEntryLine, LedgerStore, RawTransaction,
    SourceDocument, SourceDocumentKind, StoreError, TransactionKind,
};
use quanso_shared::types::{
    CounterpartyId, JournalEntryId, JournalEntryLineId, SourceDocumentId,
};

/// One line of an entry being seeded.
#[derive(Debug, Clone)]
pub struct LineInput {
    /// Account code the line posts to.
    pub account_code: String,
    /// Account display name recorded on the line.
    pub account_name: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Originating document, when the line traces back to one.
    pub source: Option<SourceDocument>,
}

impl LineInput {
    /// A debit line on an account.
    #[must_use]
    pub fn debit(account_code: &str, amount: Decimal) -> Self {
        Self {
            account_code: account_code.to_string(),
            account_name: String::new(),
            debit: amount,
            credit: Decimal::ZERO,
            source: None,
        }
    }

    /// A credit line on an account.
    #[must_use]
    pub fn credit(account_code: &str, amount: Decimal) -> Self {
        Self {
            account_code: account_code.to_string(),
            account_name: String::new(),
            debit: Decimal::ZERO,
            credit: amount,
            source: None,
        }
    }

    /// Sets the display name recorded on the line.
    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.account_name = name.to_string();
        self
    }

    /// Attaches the originating document.
    #[must_use]
    pub fn from_document(mut self, id: SourceDocumentId, kind: SourceDocumentKind) -> Self {
        self.source = Some(SourceDocument { id, kind });
        self
    }
}

/// Builds a [`MemoryLedger`].
#[derive(Debug, Default)]
pub struct MemoryLedgerBuilder {
    entries: Vec<JournalEntry>,
    lines: Vec<JournalEntryLine>,
    transactions: Vec<RawTransaction>,
    counterparties: HashMap<CounterpartyId, CounterpartyInfo>,
}

impl MemoryLedgerBuilder {
    /// Seeds a posted entry; totals are summed from the lines.
    pub fn post_entry(
        &mut self,
        date: NaiveDate,
        description: &str,
        lines: Vec<LineInput>,
    ) -> JournalEntryId {
        self.add_entry(date, description, EntryStatus::Posted, lines)
    }

    /// Seeds a draft entry, invisible to every generator.
    pub fn draft_entry(
        &mut self,
        date: NaiveDate,
        description: &str,
        lines: Vec<LineInput>,
    ) -> JournalEntryId {
        self.add_entry(date, description, EntryStatus::Draft, lines)
    }

    fn add_entry(
        &mut self,
        date: NaiveDate,
        description: &str,
        status: EntryStatus,
        lines: Vec<LineInput>,
    ) -> JournalEntryId {
        let id = JournalEntryId::new();
        let total_debit: Decimal = lines.iter().map(|l| l.debit).sum();
        let total_credit: Decimal = lines.iter().map(|l| l.credit).sum();

        self.entries.push(JournalEntry {
            id,
            entry_date: date,
            description: description.to_string(),
            status,
            total_debit,
            total_credit,
        });
        self.lines.extend(lines.into_iter().map(|l| JournalEntryLine {
            id: JournalEntryLineId::new(),
            entry_id: id,
            account_code: l.account_code,
            account_name: l.account_name,
            debit: l.debit,
            credit: l.credit,
            source: l.source,
        }));

        id
    }

    /// Seeds one counterparty transaction.
    ///
    /// The document kind decides which [`TransactionKind`] queries return
    /// it: invoices and sales receipts are sales, bills and expense claims
    /// are expenses.
    pub fn transaction(
        &mut self,
        counterparty_id: CounterpartyId,
        amount: Decimal,
        date: NaiveDate,
        document: SourceDocumentKind,
    ) -> &mut Self {
        self.transactions.push(RawTransaction {
            counterparty_id,
            amount,
            date,
            document,
        });
        self
    }

    /// Registers counterparty display information.
    pub fn counterparty(
        &mut self,
        id: CounterpartyId,
        name: &str,
        code: &str,
        contact: Option<&str>,
    ) -> &mut Self {
        self.counterparties.insert(
            id,
            CounterpartyInfo {
                name: name.to_string(),
                code: code.to_string(),
                contact: contact.map(str::to_string),
            },
        );
        self
    }

    /// Freezes the seeded data into a store.
    #[must_use]
    pub fn build(self) -> MemoryLedger {
        MemoryLedger {
            entries: self.entries,
            lines: self.lines,
            transactions: self.transactions,
            counterparties: self.counterparties,
        }
    }
}

/// Immutable in-memory ledger snapshot.
#[derive(Debug)]
pub struct MemoryLedger {
    entries: Vec<JournalEntry>,
    lines: Vec<JournalEntryLine>,
    transactions: Vec<RawTransaction>,
    counterparties: HashMap<CounterpartyId, CounterpartyInfo>,
}

impl MemoryLedger {
    /// Starts a builder.
    #[must_use]
    pub fn builder() -> MemoryLedgerBuilder {
        MemoryLedgerBuilder::default()
    }

    /// An empty ledger.
    #[must_use]
    pub fn empty() -> Self {
        Self::builder().build()
    }
}

#[async_trait::async_trait]
impl LedgerStore for MemoryLedger {
    async fn list_posted_entries(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<JournalEntry>, StoreError> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.status.is_posted())
            .filter(|e| from.is_none_or(|d| e.entry_date >= d))
            .filter(|e| to.is_none_or(|d| e.entry_date <= d))
            .cloned()
            .collect())
    }

    async fn list_lines_for_entries(
        &self,
        entry_ids: &[JournalEntryId],
    ) -> Result<Vec<JournalEntryLine>, StoreError> {
        if entry_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .lines
            .iter()
            .filter(|l| entry_ids.contains(&l.entry_id))
            .cloned()
            .collect())
    }

    async fn list_transactions(
        &self,
        kind: TransactionKind,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RawTransaction>, StoreError> {
        let wanted: &[SourceDocumentKind] = match kind {
            TransactionKind::Sales => {
                &[SourceDocumentKind::Invoice, SourceDocumentKind::SalesReceipt]
            }
            TransactionKind::Expenses => {
                &[SourceDocumentKind::Bill, SourceDocumentKind::ExpenseClaim]
            }
        };
        Ok(self
            .transactions
            .iter()
            .filter(|t| wanted.contains(&t.document))
            .filter(|t| t.date >= from && t.date <= to)
            .cloned()
            .collect())
    }

    async fn list_counterparty_info(
        &self,
        ids: &[CounterpartyId],
    ) -> Result<HashMap<CounterpartyId, CounterpartyInfo>, StoreError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.counterparties.get(id).map(|info| (*id, info.clone())))
            .collect())
    }
}
