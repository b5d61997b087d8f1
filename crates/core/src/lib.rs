//! Core reporting logic for Quanso.
//!
//! This crate contains pure reporting logic with ZERO web or database
//! dependencies. Everything reads the ledger through the async
//! [`ledger::LedgerStore`] trait and reduces to immutable report values.
//!
//! # Modules
//!
//! - `accounts` - Account classification and activity account groupings
//! - `ledger` - Journal entry domain types and the store boundary
//! - `balance` - Balance computation over posted journal entries
//! - `reports` - Balance sheet, cash flow, trial balance, profit summary
//! - `analysis` - Counterparty concentration and ranking

pub mod accounts;
pub mod analysis;
pub mod balance;
pub mod ledger;
pub mod reports;
