//! The balance computation engine.
//!
//! Turns posted journal lines into per-account balances. Aggregation is a
//! pure fold over lines; the engine adds the store round-trips in front of
//! it. Every computation is a fresh read, nothing is cached between calls.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quanso_shared::types::JournalEntryId;

use crate::accounts::{AccountClassification, ChartOfAccounts};
use crate::ledger::{JournalEntryLine, LedgerStore, StoreError};

/// Which side of a reference date a balance is taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodBoundary {
    /// Strictly before the reference date: the balance a period opens with.
    Opening,
    /// Through the reference date inclusive: the balance a period closes with.
    Closing,
}

/// Aggregated position of one account at a point in time.
///
/// Computed fresh for every report and discarded afterwards; nothing
/// persists or mutates these across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Account code.
    pub account_code: String,
    /// Resolved display name.
    pub account_name: String,
    /// Classification driving the sign convention and report routing.
    pub classification: AccountClassification,
    /// Sum of all debit amounts posted to the account.
    pub debit_total: Decimal,
    /// Sum of all credit amounts posted to the account.
    pub credit_total: Decimal,
    /// Signed balance on the account's normal side.
    pub balance: Decimal,
    /// True when the account is debit-normal (Asset, Expense).
    pub is_debit_balance: bool,
}

impl AccountBalance {
    /// Creates an empty balance for an account.
    #[must_use]
    pub fn new(
        account_code: String,
        account_name: String,
        classification: AccountClassification,
    ) -> Self {
        let is_debit_balance = classification.category.is_debit_normal();
        Self {
            account_code,
            account_name,
            classification,
            debit_total: Decimal::ZERO,
            credit_total: Decimal::ZERO,
            balance: Decimal::ZERO,
            is_debit_balance,
        }
    }

    /// Adds a debit amount and recomputes the signed balance.
    pub fn add_debit(&mut self, amount: Decimal) {
        self.debit_total += amount;
        self.recompute();
    }

    /// Adds a credit amount and recomputes the signed balance.
    pub fn add_credit(&mut self, amount: Decimal) {
        self.credit_total += amount;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.balance = self
            .classification
            .category
            .signed_balance(self.debit_total, self.credit_total);
    }

    /// True when the signed balance is zero.
    ///
    /// Zero accounts stay in the balance map; generators that only display
    /// non-zero lines filter on this.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.balance.is_zero()
    }
}

/// Folds journal lines into a per-account balance map.
///
/// Name resolution per account: the chart's own name when the code is a
/// known entry, else the name recorded on the line, else the synthesized
/// classification name. The map is keyed and ordered by account code.
#[must_use]
pub fn balances_from_lines(
    chart: &ChartOfAccounts,
    lines: &[JournalEntryLine],
) -> BTreeMap<String, AccountBalance> {
    let mut balances: BTreeMap<String, AccountBalance> = BTreeMap::new();

    for line in lines {
        let entry = balances.entry(line.account_code.clone()).or_insert_with(|| {
            let classification = chart.classify(&line.account_code);
            let name = match chart.display_name(&line.account_code) {
                Some(name) => name.to_string(),
                None if !line.account_name.is_empty() => line.account_name.clone(),
                None => classification.display_name.clone(),
            };
            AccountBalance::new(line.account_code.clone(), name, classification)
        });
        entry.add_debit(line.debit);
        entry.add_credit(line.credit);
    }

    balances
}

/// Computes account balances by reading the ledger store.
///
/// Holds the store and chart behind `Arc` so generators can share one
/// engine; the engine itself carries no per-request state.
pub struct BalanceEngine<S> {
    store: Arc<S>,
    chart: Arc<ChartOfAccounts>,
}

impl<S> Clone for BalanceEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            chart: Arc::clone(&self.chart),
        }
    }
}

impl<S: LedgerStore> BalanceEngine<S> {
    /// Creates an engine over a store and a chart of accounts.
    #[must_use]
    pub fn new(store: Arc<S>, chart: Arc<ChartOfAccounts>) -> Self {
        Self { store, chart }
    }

    /// The chart this engine classifies against.
    #[must_use]
    pub fn chart(&self) -> &ChartOfAccounts {
        &self.chart
    }

    /// Computes balances for every account posted to on or before `as_of`.
    ///
    /// When `entry_ids` is given the caller has already narrowed the entry
    /// set (typically by date range) and only those entries' lines are
    /// aggregated, skipping the entry query. No qualifying entries yields
    /// an empty map, never an error.
    pub async fn compute_balances(
        &self,
        as_of: NaiveDate,
        entry_ids: Option<&[JournalEntryId]>,
    ) -> Result<BTreeMap<String, AccountBalance>, StoreError> {
        let ids: Vec<JournalEntryId> = match entry_ids {
            Some(ids) => ids.to_vec(),
            None => self
                .store
                .list_posted_entries(None, Some(as_of))
                .await?
                .into_iter()
                .map(|entry| entry.id)
                .collect(),
        };

        if ids.is_empty() {
            return Ok(BTreeMap::new());
        }

        let lines = self.store.list_lines_for_entries(&ids).await?;
        Ok(balances_from_lines(&self.chart, &lines))
    }

    /// Signed balance of a single account at a period boundary.
    ///
    /// `Opening` takes postings strictly before `as_of`, `Closing` takes
    /// them through `as_of` inclusive. An account with no postings has a
    /// zero balance.
    pub async fn account_balance(
        &self,
        account_code: &str,
        as_of: NaiveDate,
        boundary: PeriodBoundary,
    ) -> Result<Decimal, StoreError> {
        let cutoff = match boundary {
            PeriodBoundary::Closing => as_of,
            PeriodBoundary::Opening => match as_of.pred_opt() {
                Some(day) => day,
                // Nothing can be posted before the first representable day.
                None => return Ok(Decimal::ZERO),
            },
        };

        let entries = self.store.list_posted_entries(None, Some(cutoff)).await?;
        if entries.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let ids: Vec<JournalEntryId> = entries.into_iter().map(|entry| entry.id).collect();
        let lines = self.store.list_lines_for_entries(&ids).await?;

        let mut debit = Decimal::ZERO;
        let mut credit = Decimal::ZERO;
        for line in lines.iter().filter(|l| l.account_code == account_code) {
            debit += line.debit;
            credit += line.credit;
        }

        Ok(self.chart.category_of(account_code).signed_balance(debit, credit))
    }
}
