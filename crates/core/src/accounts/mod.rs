//! Account classification and activity account groupings.
//!
//! This module decides what an account code *is*:
//! - `classify` - two-tier classification (exact chart lookup, then prefix
//!   rules) into category, subtype, and display name
//! - `groups` - the named account sets the cash flow statement watches

pub mod classify;
pub mod groups;

#[cfg(test)]
mod classify_props;

pub use classify::{AccountCategory, AccountClassification, AccountSubtype, ChartOfAccounts};
pub use groups::ActivityAccountSets;
