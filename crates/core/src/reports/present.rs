//! Cash flow presentation adapters.
//!
//! One derivation, two layouts. The international view is a single amount
//! column with indentation; the Vietnamese view splits every amount into a
//! receipts (debit) or payments (credit) column. Both are pure
//! value-to-value renderings of an already-derived [`CashFlowStatement`].

use quanso_shared::ReportLabels;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::CashFlowStatement;

/// One row of the single-column layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    /// Row label.
    pub label: String,
    /// Signed amount; `None` on section heading rows.
    pub amount: Option<Decimal>,
    /// Indent level: 0 for headings and totals, 1 for line items.
    pub indent: u8,
    /// True on subtotal and footer-total rows.
    pub is_total: bool,
}

/// International single-column presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndirectCashFlowView {
    /// Report type identifier.
    pub report_type: String,
    /// Ordered display rows.
    pub rows: Vec<StatementRow>,
}

impl IndirectCashFlowView {
    /// Renders a statement as ordered single-column rows: each section as a
    /// heading, its items, and a subtotal, followed by the reconciliation
    /// footer.
    #[must_use]
    pub fn from_statement(statement: &CashFlowStatement, labels: &ReportLabels) -> Self {
        let mut rows = Vec::new();

        for section in [&statement.operating, &statement.investing, &statement.financing] {
            rows.push(StatementRow {
                label: section.name.clone(),
                amount: None,
                indent: 0,
                is_total: false,
            });
            for item in &section.items {
                rows.push(StatementRow {
                    label: item.label.clone(),
                    amount: Some(item.amount),
                    indent: 1,
                    is_total: false,
                });
            }
            rows.push(StatementRow {
                label: section.name.clone(),
                amount: Some(section.net_cash_flow),
                indent: 0,
                is_total: true,
            });
        }

        rows.push(StatementRow {
            label: labels.net_change_in_cash.clone(),
            amount: Some(statement.net_cash_flow),
            indent: 0,
            is_total: true,
        });
        rows.push(StatementRow {
            label: labels.beginning_cash.clone(),
            amount: Some(statement.beginning_cash),
            indent: 0,
            is_total: false,
        });
        rows.push(StatementRow {
            label: labels.ending_cash.clone(),
            amount: Some(statement.ending_cash),
            indent: 0,
            is_total: true,
        });

        Self {
            report_type: "cash_flow_indirect".to_string(),
            rows,
        }
    }
}

/// One row of the receipts/payments layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnarRow {
    /// Row label.
    pub label: String,
    /// Receipts column: inflows land here.
    pub debit: Option<Decimal>,
    /// Payments column: outflow magnitudes land here.
    pub credit: Option<Decimal>,
    /// True on subtotal and footer-total rows.
    pub is_total: bool,
}

impl ColumnarRow {
    fn heading(label: &str) -> Self {
        Self {
            label: label.to_string(),
            debit: None,
            credit: None,
            is_total: false,
        }
    }

    /// Splits a signed amount into the receipts or payments column.
    fn amount(label: &str, amount: Decimal, is_total: bool) -> Self {
        let (debit, credit) = if amount < Decimal::ZERO {
            (None, Some(-amount))
        } else {
            (Some(amount), None)
        };
        Self {
            label: label.to_string(),
            debit,
            credit,
            is_total,
        }
    }
}

/// Vietnamese receipts/payments presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnarCashFlowView {
    /// Report type identifier.
    pub report_type: String,
    /// Ordered display rows.
    pub rows: Vec<ColumnarRow>,
}

impl ColumnarCashFlowView {
    /// Renders a statement with inflows in the debit column and outflows in
    /// the credit column; both columns hold non-negative magnitudes.
    #[must_use]
    pub fn from_statement(statement: &CashFlowStatement, labels: &ReportLabels) -> Self {
        let mut rows = Vec::new();

        for section in [&statement.operating, &statement.investing, &statement.financing] {
            rows.push(ColumnarRow::heading(&section.name));
            for item in &section.items {
                rows.push(ColumnarRow::amount(&item.label, item.amount, false));
            }
            rows.push(ColumnarRow::amount(&section.name, section.net_cash_flow, true));
        }

        rows.push(ColumnarRow::amount(
            &labels.net_change_in_cash,
            statement.net_cash_flow,
            true,
        ));
        rows.push(ColumnarRow::amount(
            &labels.beginning_cash,
            statement.beginning_cash,
            false,
        ));
        rows.push(ColumnarRow::amount(
            &labels.ending_cash,
            statement.ending_cash,
            true,
        ));

        Self {
            report_type: "cash_flow_columnar".to_string(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quanso_shared::CashFlowPreset;
    use quanso_shared::types::ReportPeriod;
    use rust_decimal_macros::dec;

    use crate::reports::types::{CashFlowItem, CashFlowSection};

    fn statement() -> CashFlowStatement {
        let labels = ReportLabels::default();
        let mut operating = CashFlowSection::named(&labels.operating_activities);
        operating.push(CashFlowItem {
            label: labels.net_income.clone(),
            account_code: None,
            amount: dec!(4_000_000),
        });
        operating.push(CashFlowItem {
            label: "Tăng Phải thu của khách hàng".to_string(),
            account_code: Some("131".to_string()),
            amount: dec!(-1_500_000),
        });
        let investing = CashFlowSection::named(&labels.investing_activities);
        let financing = CashFlowSection::named(&labels.financing_activities);

        let period = ReportPeriod::new(
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        CashFlowStatement {
            report_type: "cash_flow".to_string(),
            period,
            preset: CashFlowPreset::Vas,
            net_income: dec!(4_000_000),
            total_operating_cash_flow: operating.net_cash_flow,
            total_investing_cash_flow: Decimal::ZERO,
            total_financing_cash_flow: Decimal::ZERO,
            net_cash_flow: operating.net_cash_flow,
            operating,
            investing,
            financing,
            beginning_cash: dec!(0),
            ending_cash: dec!(2_500_000),
            net_change_in_cash: dec!(2_500_000),
            cash_flow_validation: true,
        }
    }

    #[test]
    fn test_indirect_view_row_order() {
        let labels = ReportLabels::default();
        let view = IndirectCashFlowView::from_statement(&statement(), &labels);

        // 3 sections (heading + subtotal each, 2 operating items) + 3 footer rows.
        assert_eq!(view.rows.len(), 2 + 2 + 2 + 2 + 3);

        let heading = &view.rows[0];
        assert_eq!(heading.label, labels.operating_activities);
        assert_eq!(heading.amount, None);
        assert!(!heading.is_total);

        let subtotal = &view.rows[3];
        assert_eq!(subtotal.amount, Some(dec!(2_500_000)));
        assert!(subtotal.is_total);

        let ending = view.rows.last().unwrap();
        assert_eq!(ending.label, labels.ending_cash);
        assert_eq!(ending.amount, Some(dec!(2_500_000)));
    }

    #[test]
    fn test_indirect_view_indents_items() {
        let labels = ReportLabels::default();
        let view = IndirectCashFlowView::from_statement(&statement(), &labels);

        assert_eq!(view.rows[1].indent, 1);
        assert_eq!(view.rows[2].indent, 1);
        assert_eq!(view.rows[3].indent, 0);
    }

    #[test]
    fn test_columnar_view_splits_by_sign() {
        let labels = ReportLabels::default();
        let view = ColumnarCashFlowView::from_statement(&statement(), &labels);

        // Net income inflow lands in the receipts column.
        let income = &view.rows[1];
        assert_eq!(income.debit, Some(dec!(4_000_000)));
        assert_eq!(income.credit, None);

        // Receivables growth is an outflow: payments column, positive magnitude.
        let receivables = &view.rows[2];
        assert_eq!(receivables.debit, None);
        assert_eq!(receivables.credit, Some(dec!(1_500_000)));
    }

    #[test]
    fn test_columnar_view_zero_lands_in_receipts() {
        let labels = ReportLabels::default();
        let row = ColumnarRow::amount(&labels.depreciation, Decimal::ZERO, false);
        assert_eq!(row.debit, Some(Decimal::ZERO));
        assert_eq!(row.credit, None);
    }

    #[test]
    fn test_views_do_not_change_totals() {
        let labels = ReportLabels::default();
        let stmt = statement();
        let view = IndirectCashFlowView::from_statement(&stmt, &labels);

        let item_sum: Decimal = view
            .rows
            .iter()
            .filter(|r| r.indent == 1)
            .filter_map(|r| r.amount)
            .sum();
        assert_eq!(item_sum, stmt.net_cash_flow);
    }
}
