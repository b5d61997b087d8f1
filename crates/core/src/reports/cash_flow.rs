//! Indirect-method cash flow statement generation.
//!
//! Derivation: actual cash movement comes from the cash-account balances at
//! the two period boundaries; the explained movement starts from net income
//! and adjusts for working-capital, investing, and financing deltas. The
//! two must reconcile within tolerance, which the statement records as
//! `cash_flow_validation`.
//!
//! Per-account balance lookups degrade to a zero contribution on store
//! failure (with a warning) so one bad account cannot sink the statement;
//! the single period fetch behind net income is fatal on failure.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use quanso_shared::types::{JournalEntryId, ReportPeriod};
use quanso_shared::{CashFlowPreset, ReportLabels};

use crate::accounts::{ActivityAccountSets, ChartOfAccounts};
use crate::balance::{BalanceEngine, PeriodBoundary};
use crate::ledger::LedgerStore;

use super::error::ReportError;
use super::reporting_tolerance;
use super::types::{CashFlowItem, CashFlowSection, CashFlowStatement};

/// How a balance delta on an account translates into cash.
#[derive(Debug, Clone, Copy)]
enum DeltaSide {
    /// Asset accounts: an increase consumes cash.
    Asset,
    /// Liability, equity, and debt accounts: an increase supplies cash.
    LiabilityOrEquity,
}

impl DeltaSide {
    fn cash_effect(self, delta: Decimal) -> Decimal {
        match self {
            Self::Asset => -delta,
            Self::LiabilityOrEquity => delta,
        }
    }
}

/// Generates the indirect-method cash flow statement.
pub struct CashFlowService<S> {
    engine: BalanceEngine<S>,
    store: Arc<S>,
    sets: ActivityAccountSets,
    preset: CashFlowPreset,
    labels: ReportLabels,
}

impl<S: LedgerStore> CashFlowService<S> {
    /// Creates the service; the preset picks the account grouping.
    #[must_use]
    pub fn new(
        store: Arc<S>,
        chart: Arc<ChartOfAccounts>,
        preset: CashFlowPreset,
        labels: ReportLabels,
    ) -> Self {
        Self {
            engine: BalanceEngine::new(Arc::clone(&store), chart),
            store,
            sets: ActivityAccountSets::for_preset(preset),
            preset,
            labels,
        }
    }

    /// Generates the statement over a period (both ends inclusive).
    ///
    /// An empty period yields the all-zero statement with
    /// `cash_flow_validation = true`.
    pub async fn generate(&self, period: ReportPeriod) -> Result<CashFlowStatement, ReportError> {
        if !period.is_ordered() {
            return Err(ReportError::InvalidPeriod {
                start: period.start,
                end: period.end,
            });
        }

        // Actual cash movement, straight from the books.
        let beginning_cash = self.cash_total(period.start, PeriodBoundary::Opening).await;
        let ending_cash = self.cash_total(period.end, PeriodBoundary::Closing).await;
        let net_change_in_cash = ending_cash - beginning_cash;

        let net_income = self.net_income(period).await?;

        let mut operating = CashFlowSection::named(&self.labels.operating_activities);
        operating.push(CashFlowItem {
            label: self.labels.net_income.clone(),
            account_code: None,
            amount: net_income,
        });
        // The books carry no depreciation postings; the adjustment line is
        // emitted at zero so the layout stays complete.
        operating.push(CashFlowItem {
            label: self.labels.depreciation.clone(),
            account_code: None,
            amount: Decimal::ZERO,
        });
        self.push_delta_items(
            &mut operating,
            &self.sets.operating_current_assets,
            DeltaSide::Asset,
            period,
        )
        .await;
        self.push_delta_items(
            &mut operating,
            &self.sets.operating_current_liabilities,
            DeltaSide::LiabilityOrEquity,
            period,
        )
        .await;

        let mut investing = CashFlowSection::named(&self.labels.investing_activities);
        self.push_delta_items(&mut investing, &self.sets.investing_assets, DeltaSide::Asset, period)
            .await;

        let mut financing = CashFlowSection::named(&self.labels.financing_activities);
        self.push_delta_items(
            &mut financing,
            &self.sets.financing_equity,
            DeltaSide::LiabilityOrEquity,
            period,
        )
        .await;
        self.push_delta_items(
            &mut financing,
            &self.sets.financing_debt,
            DeltaSide::LiabilityOrEquity,
            period,
        )
        .await;

        let total_operating_cash_flow = operating.net_cash_flow;
        let total_investing_cash_flow = investing.net_cash_flow;
        let total_financing_cash_flow = financing.net_cash_flow;
        let net_cash_flow =
            total_operating_cash_flow + total_investing_cash_flow + total_financing_cash_flow;
        let cash_flow_validation =
            (net_cash_flow - net_change_in_cash).abs() < reporting_tolerance();

        debug!(
            start = %period.start,
            end = %period.end,
            %net_cash_flow,
            %net_change_in_cash,
            validated = cash_flow_validation,
            "cash flow statement generated"
        );

        Ok(CashFlowStatement {
            report_type: "cash_flow".to_string(),
            period,
            preset: self.preset,
            net_income,
            operating,
            investing,
            financing,
            total_operating_cash_flow,
            total_investing_cash_flow,
            total_financing_cash_flow,
            net_cash_flow,
            beginning_cash,
            ending_cash,
            net_change_in_cash,
            cash_flow_validation,
        })
    }

    /// Net income over the period from the preset's revenue and expense
    /// sets. One entry fetch, one line fetch; failures propagate.
    async fn net_income(&self, period: ReportPeriod) -> Result<Decimal, ReportError> {
        let entries = self
            .store
            .list_posted_entries(Some(period.start), Some(period.end))
            .await?;
        if entries.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let ids: Vec<JournalEntryId> = entries.into_iter().map(|entry| entry.id).collect();
        let lines = self.store.list_lines_for_entries(&ids).await?;

        let mut revenue = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        for line in &lines {
            if self.sets.revenue.contains(&line.account_code) {
                revenue += line.credit - line.debit;
            } else if self.sets.expenses.contains(&line.account_code) {
                expenses += line.debit - line.credit;
            }
        }

        Ok(revenue - expenses)
    }

    /// Sums the preset's cash accounts at one boundary.
    async fn cash_total(&self, as_of: NaiveDate, boundary: PeriodBoundary) -> Decimal {
        let mut total = Decimal::ZERO;
        for code in &self.sets.cash {
            total += self.balance_or_zero(code, as_of, boundary).await;
        }
        total
    }

    /// Emits one delta line item per account whose balance moved more than
    /// the tolerance between the period boundaries.
    async fn push_delta_items(
        &self,
        section: &mut CashFlowSection,
        codes: &[String],
        side: DeltaSide,
        period: ReportPeriod,
    ) {
        for code in codes {
            let opening = self
                .balance_or_zero(code, period.start, PeriodBoundary::Opening)
                .await;
            let closing = self
                .balance_or_zero(code, period.end, PeriodBoundary::Closing)
                .await;
            let delta = closing - opening;

            if delta.abs() <= reporting_tolerance() {
                continue;
            }

            let prefix = if delta > Decimal::ZERO {
                &self.labels.increase_prefix
            } else {
                &self.labels.decrease_prefix
            };
            let name = self.engine.chart().classify(code).display_name;

            section.push(CashFlowItem {
                label: format!("{prefix} {name}"),
                account_code: Some(code.clone()),
                amount: side.cash_effect(delta),
            });
        }
    }

    /// Single-account balance, degraded to zero on store failure.
    async fn balance_or_zero(
        &self,
        code: &str,
        as_of: NaiveDate,
        boundary: PeriodBoundary,
    ) -> Decimal {
        match self.engine.account_balance(code, as_of, boundary).await {
            Ok(balance) => balance,
            Err(e) => {
                warn!(account = %code, error = %e, "account balance failed, contributing zero");
                Decimal::ZERO
            }
        }
    }
}
