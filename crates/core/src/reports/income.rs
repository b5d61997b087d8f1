//! Profitability summary generation.

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use quanso_shared::types::{JournalEntryId, ReportPeriod};

use crate::accounts::{AccountSubtype, ChartOfAccounts};
use crate::balance::{AccountBalance, balances_from_lines};
use crate::ledger::LedgerStore;

use super::error::ReportError;
use super::types::ProfitSummary;

/// Generates the profitability summary.
pub struct IncomeService<S> {
    store: Arc<S>,
    chart: Arc<ChartOfAccounts>,
}

impl<S: LedgerStore> IncomeService<S> {
    /// Creates the service over a store and chart.
    #[must_use]
    pub fn new(store: Arc<S>, chart: Arc<ChartOfAccounts>) -> Self {
        Self { store, chart }
    }

    /// Summarizes profitability over a period (both ends inclusive).
    ///
    /// An empty period yields the all-zero summary.
    pub async fn summarize(&self, period: ReportPeriod) -> Result<ProfitSummary, ReportError> {
        if !period.is_ordered() {
            return Err(ReportError::InvalidPeriod {
                start: period.start,
                end: period.end,
            });
        }

        let entries = self
            .store
            .list_posted_entries(Some(period.start), Some(period.end))
            .await?;
        let ids: Vec<JournalEntryId> = entries.into_iter().map(|entry| entry.id).collect();

        let lines = if ids.is_empty() {
            Vec::new()
        } else {
            self.store.list_lines_for_entries(&ids).await?
        };

        let balances = balances_from_lines(&self.chart, &lines);
        let summary = summarize_balances(period, &balances);

        debug!(
            start = %period.start,
            end = %period.end,
            net_income = %summary.net_income,
            "profit summary generated"
        );

        Ok(summary)
    }
}

/// Buckets profit-and-loss balances by subtype and derives the margins.
///
/// Balance-sheet accounts are ignored; each P&L account contributes its
/// signed balance (revenue credit-normal, expenses debit-normal).
pub(crate) fn summarize_balances(
    period: ReportPeriod,
    balances: &BTreeMap<String, AccountBalance>,
) -> ProfitSummary {
    let mut revenue = Decimal::ZERO;
    let mut cost_of_sales = Decimal::ZERO;
    let mut operating_expenses = Decimal::ZERO;
    let mut financial_expenses = Decimal::ZERO;
    let mut other_income = Decimal::ZERO;
    let mut other_expenses = Decimal::ZERO;

    for balance in balances.values() {
        match balance.classification.subtype {
            AccountSubtype::OperatingRevenue | AccountSubtype::FinancialIncome => {
                revenue += balance.balance;
            }
            AccountSubtype::OtherIncome => other_income += balance.balance,
            AccountSubtype::CostOfSales => cost_of_sales += balance.balance,
            AccountSubtype::SellingExpense | AccountSubtype::AdministrativeExpense => {
                operating_expenses += balance.balance;
            }
            AccountSubtype::FinancialExpense => financial_expenses += balance.balance,
            AccountSubtype::OtherExpense | AccountSubtype::IncomeTaxExpense => {
                other_expenses += balance.balance;
            }
            _ => {}
        }
    }

    let gross_profit = revenue - cost_of_sales;
    let operating_profit = gross_profit - operating_expenses;
    let net_income = operating_profit - financial_expenses + other_income - other_expenses;

    ProfitSummary {
        report_type: "profit_summary".to_string(),
        period,
        revenue,
        cost_of_sales,
        gross_profit,
        operating_expenses,
        operating_profit,
        financial_expenses,
        other_income,
        other_expenses,
        net_income,
        gross_margin_pct: percentage(gross_profit, revenue),
        net_margin_pct: percentage(net_income, revenue),
    }
}

/// `part / whole * 100` rounded to 2 dp, zero when the whole is zero.
fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part / whole * Decimal::ONE_HUNDRED).round_dp(2)
    }
}
