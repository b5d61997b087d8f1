//! Activity account groupings for the cash flow statement.
//!
//! The statement watches fixed sets of accounts per activity. Two named
//! groupings exist, inherited from the two original statement variants:
//! the Vietnamese-standard one and a leaner general-ledger one. They are
//! deliberately kept separate and selectable; neither is a superset
//! contract of the other.

use quanso_shared::CashFlowPreset;
use serde::{Deserialize, Serialize};

/// The account sets one cash flow derivation run watches.
///
/// Pure data; the derivation core never hardcodes an account code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAccountSets {
    /// Cash and cash-equivalent accounts (beginning/ending cash).
    pub cash: Vec<String>,
    /// Working-capital asset accounts watched by operating activities.
    pub operating_current_assets: Vec<String>,
    /// Working-capital liability accounts watched by operating activities.
    pub operating_current_liabilities: Vec<String>,
    /// Fixed-asset and long-term-investment accounts (investing).
    pub investing_assets: Vec<String>,
    /// Equity accounts watched by financing activities.
    pub financing_equity: Vec<String>,
    /// Long-term debt accounts watched by financing activities.
    pub financing_debt: Vec<String>,
    /// Revenue accounts feeding the period's net income.
    pub revenue: Vec<String>,
    /// Expense and COGS accounts feeding the period's net income.
    pub expenses: Vec<String>,
}

fn codes(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|c| (*c).to_string()).collect()
}

impl ActivityAccountSets {
    /// The Vietnamese-standard grouping (the fuller account lists).
    #[must_use]
    pub fn vas() -> Self {
        Self {
            cash: codes(&["101", "111", "112", "113"]),
            operating_current_assets: codes(&[
                "131", "133", "136", "138", "141", "151", "152", "153", "154", "155", "156",
                "157",
            ]),
            operating_current_liabilities: codes(&["331", "333", "334", "335", "336", "338"]),
            investing_assets: codes(&["211", "212", "213", "217", "221", "222", "228", "241"]),
            financing_equity: codes(&["411", "412", "418", "421"]),
            financing_debt: codes(&["341", "343"]),
            revenue: codes(&["511", "515", "711"]),
            expenses: codes(&["632", "635", "641", "642", "811", "821"]),
        }
    }

    /// The general-ledger grouping (the leaner account lists).
    #[must_use]
    pub fn general() -> Self {
        Self {
            cash: codes(&["101", "111", "112"]),
            operating_current_assets: codes(&["131", "133", "138", "141", "152", "153", "155", "156"]),
            operating_current_liabilities: codes(&["331", "333", "334", "338"]),
            investing_assets: codes(&["211", "213", "221", "228"]),
            financing_equity: codes(&["411", "421"]),
            financing_debt: codes(&["341"]),
            revenue: codes(&["511", "515", "711"]),
            expenses: codes(&["632", "635", "641", "642", "811", "821"]),
        }
    }

    /// Resolves the configured preset to its account sets.
    #[must_use]
    pub fn for_preset(preset: CashFlowPreset) -> Self {
        match preset {
            CashFlowPreset::Vas => Self::vas(),
            CashFlowPreset::General => Self::general(),
        }
    }

    /// True if the code is a cash account under this grouping.
    #[must_use]
    pub fn is_cash_account(&self, code: &str) -> bool {
        self.cash.iter().any(|c| c == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_distinct() {
        assert_ne!(ActivityAccountSets::vas(), ActivityAccountSets::general());
    }

    #[test]
    fn test_preset_resolution() {
        assert_eq!(
            ActivityAccountSets::for_preset(CashFlowPreset::Vas),
            ActivityAccountSets::vas()
        );
        assert_eq!(
            ActivityAccountSets::for_preset(CashFlowPreset::General),
            ActivityAccountSets::general()
        );
    }

    #[test]
    fn test_cash_never_overlaps_watched_sets() {
        for sets in [ActivityAccountSets::vas(), ActivityAccountSets::general()] {
            for code in &sets.cash {
                assert!(!sets.operating_current_assets.contains(code));
                assert!(!sets.investing_assets.contains(code));
                assert!(!sets.financing_equity.contains(code));
            }
        }
    }

    #[test]
    fn test_no_set_is_empty() {
        for sets in [ActivityAccountSets::vas(), ActivityAccountSets::general()] {
            assert!(!sets.cash.is_empty());
            assert!(!sets.operating_current_assets.is_empty());
            assert!(!sets.operating_current_liabilities.is_empty());
            assert!(!sets.investing_assets.is_empty());
            assert!(!sets.financing_equity.is_empty());
            assert!(!sets.financing_debt.is_empty());
            assert!(!sets.revenue.is_empty());
            assert!(!sets.expenses.is_empty());
        }
    }

    #[test]
    fn test_is_cash_account() {
        let sets = ActivityAccountSets::vas();
        assert!(sets.is_cash_account("112"));
        assert!(!sets.is_cash_account("131"));
    }
}
