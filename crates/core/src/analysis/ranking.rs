//! Counterparty ranking.
//!
//! Groups raw sales or expense transactions by counterparty, ranks them by
//! total amount, and derives the population-level concentration metrics.
//! The metrics always describe the full grouped population; `limit` only
//! truncates the listed rankings.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use quanso_shared::ReportLabels;
use quanso_shared::types::{CounterpartyId, ReportPeriod};

use crate::ledger::{LedgerStore, RawTransaction, TransactionKind};

use super::concentration::{
    CounterpartySegment, concentration_ratio, gini_coefficient, segment_for_rank,
};
use super::error::AnalysisError;

/// One ranked counterparty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterpartyRanking {
    /// 1-based position by descending total amount.
    pub rank: usize,
    /// The counterparty.
    pub counterparty_id: CounterpartyId,
    /// Display name, or the configured fallback when the store has no
    /// record of the id.
    pub name: String,
    /// Short code assigned by the books, empty when unknown.
    pub code: String,
    /// Contact detail, when recorded.
    pub contact: Option<String>,
    /// Summed transaction amount over the period.
    pub total_amount: Decimal,
    /// Number of transactions in the period.
    pub transaction_count: usize,
    /// Smallest single transaction.
    pub min_amount: Decimal,
    /// Largest single transaction.
    pub max_amount: Decimal,
    /// Date of the earliest transaction in the period.
    pub first_transaction: NaiveDate,
    /// Date of the latest transaction in the period.
    pub last_transaction: NaiveDate,
    /// `total_amount / population total * 100`, rounded to 2 dp.
    pub percentage: Decimal,
    /// Size segment within the ranked population.
    pub segment: CounterpartySegment,
}

/// Counterparty concentration report.
///
/// Every aggregate below describes the full grouped population, even when
/// `rankings` is truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    /// Report type identifier.
    pub report_type: String,
    /// Period the report covers.
    pub period: ReportPeriod,
    /// Which side of the business was ranked.
    pub kind: TransactionKind,
    /// Ranked counterparties, descending by total, truncated to the limit.
    pub rankings: Vec<CounterpartyRanking>,
    /// Counterparties in the full population.
    pub counterparty_count: usize,
    /// Transactions in the full population.
    pub transaction_count: usize,
    /// Summed amount across the full population.
    pub total_amount: Decimal,
    /// `total_amount / counterparty_count`, zero for an empty population.
    pub average_per_counterparty: Decimal,
    /// Share of the top counterparty, as a percentage.
    pub top_percentage: Decimal,
    /// Share of the top five counterparties, as a percentage.
    pub top_five_percentage: Decimal,
    /// Discrete Gini coefficient over the counterparty totals.
    pub gini_coefficient: Decimal,
}

/// Running aggregate for one counterparty while grouping.
#[derive(Debug, Clone)]
struct Grouped {
    total: Decimal,
    count: usize,
    min: Decimal,
    max: Decimal,
    first: NaiveDate,
    last: NaiveDate,
}

impl Grouped {
    fn seed(tx: &RawTransaction) -> Self {
        Self {
            total: tx.amount,
            count: 1,
            min: tx.amount,
            max: tx.amount,
            first: tx.date,
            last: tx.date,
        }
    }

    fn absorb(&mut self, tx: &RawTransaction) {
        self.total += tx.amount;
        self.count += 1;
        self.min = self.min.min(tx.amount);
        self.max = self.max.max(tx.amount);
        self.first = self.first.min(tx.date);
        self.last = self.last.max(tx.date);
    }
}

/// Generates counterparty concentration reports.
pub struct RankingService<S> {
    store: Arc<S>,
    labels: ReportLabels,
}

impl<S: LedgerStore> RankingService<S> {
    /// Creates the service over a store.
    #[must_use]
    pub fn new(store: Arc<S>, labels: ReportLabels) -> Self {
        Self { store, labels }
    }

    /// Ranks counterparties of one kind over a period (both ends inclusive).
    ///
    /// A period with no transactions yields the empty report with every
    /// ratio at zero.
    pub async fn rank(
        &self,
        period: ReportPeriod,
        kind: TransactionKind,
        limit: usize,
    ) -> Result<RankingReport, AnalysisError> {
        if !period.is_ordered() {
            return Err(AnalysisError::InvalidPeriod {
                start: period.start,
                end: period.end,
            });
        }

        let transactions = self
            .store
            .list_transactions(kind, period.start, period.end)
            .await?;
        let transaction_count = transactions.len();

        let mut grouped: HashMap<CounterpartyId, Grouped> = HashMap::new();
        for tx in &transactions {
            grouped
                .entry(tx.counterparty_id)
                .and_modify(|g| g.absorb(tx))
                .or_insert_with(|| Grouped::seed(tx));
        }

        let counterparty_count = grouped.len();
        let total_amount: Decimal = grouped.values().map(|g| g.total).sum();

        // Descending by total; ties broken by id so the order is stable
        // across identical ledgers.
        let mut ordered: Vec<(CounterpartyId, Grouped)> = grouped.into_iter().collect();
        ordered.sort_by(|(a_id, a), (b_id, b)| b.total.cmp(&a.total).then(a_id.cmp(b_id)));

        let descending_totals: Vec<Decimal> = ordered.iter().map(|(_, g)| g.total).collect();
        let gini = gini_coefficient(&descending_totals);
        let top_percentage = concentration_ratio(&descending_totals, 1);
        let top_five_percentage = concentration_ratio(&descending_totals, 5);

        let average_per_counterparty = if counterparty_count == 0 {
            Decimal::ZERO
        } else {
            (total_amount / Decimal::from(counterparty_count)).round_dp(2)
        };

        let listed: Vec<(usize, CounterpartyId, Grouped)> = ordered
            .into_iter()
            .enumerate()
            .take(limit)
            .map(|(index, (id, g))| (index + 1, id, g))
            .collect();

        let ids: Vec<CounterpartyId> = listed.iter().map(|(_, id, _)| *id).collect();
        let mut info = self.store.list_counterparty_info(&ids).await?;

        let rankings = listed
            .into_iter()
            .map(|(rank, id, g)| {
                let percentage = if total_amount.is_zero() {
                    Decimal::ZERO
                } else {
                    (g.total / total_amount * Decimal::ONE_HUNDRED).round_dp(2)
                };
                let (name, code, contact) = match info.remove(&id) {
                    Some(i) => (i.name, i.code, i.contact),
                    None => (
                        self.labels.unidentified_counterparty.clone(),
                        String::new(),
                        None,
                    ),
                };
                CounterpartyRanking {
                    rank,
                    counterparty_id: id,
                    name,
                    code,
                    contact,
                    total_amount: g.total,
                    transaction_count: g.count,
                    min_amount: g.min,
                    max_amount: g.max,
                    first_transaction: g.first,
                    last_transaction: g.last,
                    percentage,
                    segment: segment_for_rank(rank, counterparty_count),
                }
            })
            .collect();

        debug!(
            start = %period.start,
            end = %period.end,
            ?kind,
            counterparties = counterparty_count,
            transactions = transaction_count,
            %gini,
            "counterparty ranking generated"
        );

        Ok(RankingReport {
            report_type: "counterparty_ranking".to_string(),
            period,
            kind,
            rankings,
            counterparty_count,
            transaction_count,
            total_amount,
            average_per_counterparty,
            top_percentage,
            top_five_percentage,
            gini_coefficient: gini,
        })
    }
}
