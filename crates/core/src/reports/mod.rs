//! Financial statement generation.
//!
//! This module turns balance maps into the reports callers consume:
//! - Trial balance over every account with postings
//! - Balance sheet with accounting-identity validation
//! - Indirect-method cash flow statement with reconciliation
//! - Profitability summary over a period
//! - Presentation adapters for the two cash-flow layouts

use rust_decimal::Decimal;

pub mod balance_sheet;
pub mod cash_flow;
pub mod error;
pub mod income;
pub mod present;
pub mod trial;
pub mod types;


pub use balance_sheet::BalanceSheetService;
pub use cash_flow::CashFlowService;
pub use error::ReportError;
pub use income::IncomeService;
pub use present::{ColumnarCashFlowView, ColumnarRow, IndirectCashFlowView, StatementRow};
pub use trial::TrialBalanceService;
pub use types::*;

/// Tolerance shared by every identity and reconciliation check.
pub(crate) fn reporting_tolerance() -> Decimal {
    Decimal::new(1, 2)
}
