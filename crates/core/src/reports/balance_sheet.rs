//! Balance sheet generation.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use quanso_shared::ReportLabels;
use quanso_shared::types::{JournalEntryId, SourceDocumentId};

use crate::accounts::{AccountCategory, AccountSubtype, ChartOfAccounts};
use crate::balance::{AccountBalance, balances_from_lines};
use crate::ledger::LedgerStore;

use super::error::ReportError;
use super::reporting_tolerance;
use super::types::{BalanceSheetReport, BalanceSheetSection};

/// Generates the balance sheet.
pub struct BalanceSheetService<S> {
    store: Arc<S>,
    chart: Arc<ChartOfAccounts>,
    labels: ReportLabels,
}

impl<S: LedgerStore> BalanceSheetService<S> {
    /// Creates the service over a store and chart.
    #[must_use]
    pub fn new(store: Arc<S>, chart: Arc<ChartOfAccounts>, labels: ReportLabels) -> Self {
        Self {
            store,
            chart,
            labels,
        }
    }

    /// Generates the balance sheet as of a date (inclusive).
    ///
    /// Entries and lines are fetched once each; the entry ids also feed the
    /// report counters. An empty ledger yields the zero report with
    /// `is_balanced = true`.
    pub async fn generate(&self, as_of: NaiveDate) -> Result<BalanceSheetReport, ReportError> {
        let entries = self.store.list_posted_entries(None, Some(as_of)).await?;
        let ids: Vec<JournalEntryId> = entries.into_iter().map(|entry| entry.id).collect();

        let (lines, transaction_count) = if ids.is_empty() {
            (Vec::new(), 0)
        } else {
            let lines = self.store.list_lines_for_entries(&ids).await?;
            let documents: HashSet<SourceDocumentId> =
                lines.iter().filter_map(|l| l.source.map(|s| s.id)).collect();
            (lines, documents.len())
        };

        let balances = balances_from_lines(&self.chart, &lines);
        let account_count = balances.len();

        let report = assemble(
            as_of,
            balances,
            &self.labels,
            account_count,
            ids.len(),
            transaction_count,
        );

        debug!(
            %as_of,
            accounts = account_count,
            entries = report.entry_count,
            balanced = report.is_balanced,
            "balance sheet generated"
        );

        Ok(report)
    }
}

/// Routes classified balances into the nine sections and sums them.
///
/// Zero-balance accounts are dropped; Revenue/Expense accounts never appear
/// (income is not closed into equity).
pub(crate) fn assemble(
    as_of: NaiveDate,
    balances: BTreeMap<String, AccountBalance>,
    labels: &ReportLabels,
    account_count: usize,
    entry_count: usize,
    transaction_count: usize,
) -> BalanceSheetReport {
    let mut current_assets = BalanceSheetSection::named(&labels.current_assets);
    let mut fixed_assets = BalanceSheetSection::named(&labels.fixed_assets);
    let mut other_assets = BalanceSheetSection::named(&labels.other_assets);
    let mut current_liabilities = BalanceSheetSection::named(&labels.current_liabilities);
    let mut long_term_liabilities = BalanceSheetSection::named(&labels.long_term_liabilities);
    let mut other_liabilities = BalanceSheetSection::named(&labels.other_liabilities);
    let mut owner_equity = BalanceSheetSection::named(&labels.owner_equity);
    let mut retained_earnings = BalanceSheetSection::named(&labels.retained_earnings);
    let mut other_equity = BalanceSheetSection::named(&labels.other_equity);

    for balance in balances.into_values() {
        if balance.is_zero() {
            continue;
        }
        let subtype = balance.classification.subtype;
        match balance.classification.category {
            AccountCategory::Asset => match subtype {
                AccountSubtype::CurrentAsset => current_assets.push(balance),
                AccountSubtype::FixedAsset => fixed_assets.push(balance),
                _ => other_assets.push(balance),
            },
            AccountCategory::Liability => match subtype {
                AccountSubtype::CurrentLiability => current_liabilities.push(balance),
                AccountSubtype::LongTermLiability => long_term_liabilities.push(balance),
                _ => other_liabilities.push(balance),
            },
            AccountCategory::Equity => match subtype {
                AccountSubtype::OwnerEquity => owner_equity.push(balance),
                AccountSubtype::RetainedEarnings => retained_earnings.push(balance),
                _ => other_equity.push(balance),
            },
            AccountCategory::Revenue | AccountCategory::Expense => {}
        }
    }

    let total_assets = current_assets.total + fixed_assets.total + other_assets.total;
    let total_liabilities =
        current_liabilities.total + long_term_liabilities.total + other_liabilities.total;
    let total_equity = owner_equity.total + retained_earnings.total + other_equity.total;
    let total_liabilities_and_equity = total_liabilities + total_equity;
    let is_balanced =
        (total_assets - total_liabilities_and_equity).abs() < reporting_tolerance();

    BalanceSheetReport {
        report_type: "balance_sheet".to_string(),
        as_of,
        current_assets,
        fixed_assets,
        other_assets,
        current_liabilities,
        long_term_liabilities,
        other_liabilities,
        owner_equity,
        retained_earnings,
        other_equity,
        total_assets,
        total_liabilities,
        total_equity,
        total_liabilities_and_equity,
        is_balanced,
        account_count,
        entry_count,
        transaction_count,
    }
}
