//! Trial balance generation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::balance::{AccountBalance, BalanceEngine};
use crate::ledger::LedgerStore;

use super::error::ReportError;
use super::reporting_tolerance;
use super::types::{TrialBalanceReport, TrialBalanceTotals};

/// Generates the trial balance.
pub struct TrialBalanceService<S> {
    engine: BalanceEngine<S>,
}

impl<S: LedgerStore> TrialBalanceService<S> {
    /// Creates the service over a balance engine.
    #[must_use]
    pub fn new(engine: BalanceEngine<S>) -> Self {
        Self { engine }
    }

    /// Generates the trial balance as of a date (inclusive).
    ///
    /// An empty ledger yields an empty, balanced report.
    pub async fn generate(&self, as_of: NaiveDate) -> Result<TrialBalanceReport, ReportError> {
        let balances = self.engine.compute_balances(as_of, None).await?;
        let accounts: Vec<AccountBalance> = balances.into_values().collect();
        let totals = totals(&accounts);

        debug!(%as_of, accounts = accounts.len(), "trial balance generated");

        Ok(TrialBalanceReport {
            report_type: "trial_balance".to_string(),
            as_of,
            accounts,
            totals,
        })
    }
}

/// Sums debit and credit columns across all accounts.
pub(crate) fn totals(accounts: &[AccountBalance]) -> TrialBalanceTotals {
    let total_debit: Decimal = accounts.iter().map(|a| a.debit_total).sum();
    let total_credit: Decimal = accounts.iter().map(|a| a.credit_total).sum();

    TrialBalanceTotals {
        total_debit,
        total_credit,
        is_balanced: (total_debit - total_credit).abs() < reporting_tolerance(),
    }
}
