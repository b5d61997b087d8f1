//! Balance computation over posted journal lines.
//!
//! - Per-account debit/credit accumulation with the category sign convention
//! - Point-in-time balance maps for the statement generators
//! - Single-account balances at a period boundary for delta analysis

pub mod engine;

pub use engine::{AccountBalance, BalanceEngine, PeriodBoundary, balances_from_lines};
