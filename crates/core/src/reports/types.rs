//! Report value objects.
//!
//! Immutable outputs of the generators. Every type serializes with serde;
//! presentation (currency formatting, HTTP shaping) is the caller's concern.

use chrono::NaiveDate;
use quanso_shared::CashFlowPreset;
use quanso_shared::types::ReportPeriod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance::AccountBalance;

/// Trial balance report: every account with postings, in code order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Report type identifier.
    pub report_type: String,
    /// As-of date (inclusive).
    pub as_of: NaiveDate,
    /// Account balances in code order.
    pub accounts: Vec<AccountBalance>,
    /// Totals.
    pub totals: TrialBalanceTotals,
}

/// Trial balance totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debit across all accounts.
    pub total_debit: Decimal,
    /// Total credit across all accounts.
    pub total_credit: Decimal,
    /// Whether debits equal credits within tolerance.
    pub is_balanced: bool,
}

/// One named section of the balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetSection {
    /// Section display name.
    pub name: String,
    /// Section total.
    pub total: Decimal,
    /// Member accounts, non-zero balances only, in code order.
    pub accounts: Vec<AccountBalance>,
}

impl BalanceSheetSection {
    /// An empty section with the given name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Adds an account and grows the section total.
    pub fn push(&mut self, account: AccountBalance) {
        self.total += account.balance;
        self.accounts.push(account);
    }
}

/// Balance sheet report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Report type identifier.
    pub report_type: String,
    /// As-of date (inclusive).
    pub as_of: NaiveDate,
    /// Current assets section.
    pub current_assets: BalanceSheetSection,
    /// Fixed assets section.
    pub fixed_assets: BalanceSheetSection,
    /// Other assets section.
    pub other_assets: BalanceSheetSection,
    /// Current liabilities section.
    pub current_liabilities: BalanceSheetSection,
    /// Long-term liabilities section.
    pub long_term_liabilities: BalanceSheetSection,
    /// Other liabilities section.
    pub other_liabilities: BalanceSheetSection,
    /// Owner equity section.
    pub owner_equity: BalanceSheetSection,
    /// Retained earnings section.
    pub retained_earnings: BalanceSheetSection,
    /// Other equity section.
    pub other_equity: BalanceSheetSection,
    /// Sum of the three asset sections.
    pub total_assets: Decimal,
    /// Sum of the three liability sections.
    pub total_liabilities: Decimal,
    /// Sum of the three equity sections.
    pub total_equity: Decimal,
    /// Liabilities plus equity.
    pub total_liabilities_and_equity: Decimal,
    /// Whether assets equal liabilities plus equity within tolerance.
    pub is_balanced: bool,
    /// Distinct accounts with postings as of the date (zero balances included).
    pub account_count: usize,
    /// Qualifying journal entries.
    pub entry_count: usize,
    /// Distinct originating business documents among the lines.
    pub transaction_count: usize,
}

/// One line item of a cash flow section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowItem {
    /// Line label (section-prefixed account name or fixed item).
    pub label: String,
    /// Account the item was derived from, when it maps to one.
    pub account_code: Option<String>,
    /// Signed cash effect: positive = inflow, negative = outflow.
    pub amount: Decimal,
}

/// One activity section of the cash flow statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSection {
    /// Section display name.
    pub name: String,
    /// Emitted line items.
    pub items: Vec<CashFlowItem>,
    /// Signed sum of the section's items.
    pub net_cash_flow: Decimal,
}

impl CashFlowSection {
    /// An empty section with the given name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            items: Vec::new(),
            net_cash_flow: Decimal::ZERO,
        }
    }

    /// Adds a line item and grows the section net.
    pub fn push(&mut self, item: CashFlowItem) {
        self.net_cash_flow += item.amount;
        self.items.push(item);
    }
}

/// Indirect-method cash flow statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    /// Report type identifier.
    pub report_type: String,
    /// Period the statement covers.
    pub period: ReportPeriod,
    /// The account grouping preset the derivation used.
    pub preset: CashFlowPreset,
    /// Net income for the period.
    pub net_income: Decimal,
    /// Operating activities.
    pub operating: CashFlowSection,
    /// Investing activities.
    pub investing: CashFlowSection,
    /// Financing activities.
    pub financing: CashFlowSection,
    /// Operating section net.
    pub total_operating_cash_flow: Decimal,
    /// Investing section net.
    pub total_investing_cash_flow: Decimal,
    /// Financing section net.
    pub total_financing_cash_flow: Decimal,
    /// Sum of the three section nets.
    pub net_cash_flow: Decimal,
    /// Cash balance at the start of the period (opening boundary).
    pub beginning_cash: Decimal,
    /// Cash balance at the end of the period (closing boundary).
    pub ending_cash: Decimal,
    /// `ending_cash - beginning_cash`.
    pub net_change_in_cash: Decimal,
    /// Whether the derived net cash flow reconciles with the actual
    /// change in cash within tolerance.
    pub cash_flow_validation: bool,
}

/// Profitability summary over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitSummary {
    /// Report type identifier.
    pub report_type: String,
    /// Period the summary covers.
    pub period: ReportPeriod,
    /// Operating and financial revenue.
    pub revenue: Decimal,
    /// Cost of goods sold.
    pub cost_of_sales: Decimal,
    /// `revenue - cost_of_sales`.
    pub gross_profit: Decimal,
    /// Selling and administrative expenses.
    pub operating_expenses: Decimal,
    /// `gross_profit - operating_expenses`.
    pub operating_profit: Decimal,
    /// Financial expenses (interest and similar).
    pub financial_expenses: Decimal,
    /// Income outside ordinary activities.
    pub other_income: Decimal,
    /// Expenses outside ordinary activities, including income tax.
    pub other_expenses: Decimal,
    /// Bottom line for the period.
    pub net_income: Decimal,
    /// `gross_profit / revenue * 100`, zero when revenue is zero.
    pub gross_margin_pct: Decimal,
    /// `net_income / revenue * 100`, zero when revenue is zero.
    pub net_margin_pct: Decimal,
}
