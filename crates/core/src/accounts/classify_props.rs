//! Property-based tests for account classification.

use proptest::prelude::*;

use super::classify::{AccountCategory, ChartOfAccounts};

/// Strategy for three-digit numeric account codes.
fn numeric_code_strategy() -> impl Strategy<Value = String> {
    (100u32..1000u32).prop_map(|n| n.to_string())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Classification is a pure function: identical code, identical result.
    #[test]
    fn prop_classification_deterministic(code in "\\PC{0,8}") {
        let chart = ChartOfAccounts::vietnamese();
        prop_assert_eq!(chart.classify(&code), chart.classify(&code));
    }

    /// Classification never panics, whatever the code looks like.
    #[test]
    fn prop_classification_total(code in "\\PC{0,16}") {
        let chart = ChartOfAccounts::vietnamese();
        let c = chart.classify(&code);
        prop_assert!(!c.display_name.is_empty());
    }

    /// First digit fixes the category for every numeric code.
    #[test]
    fn prop_first_digit_fixes_category(code in numeric_code_strategy()) {
        let chart = ChartOfAccounts::vietnamese();
        let c = chart.classify(&code);
        match code.as_bytes()[0] {
            b'1' | b'2' => prop_assert_eq!(c.category, AccountCategory::Asset),
            b'3' => prop_assert_eq!(c.category, AccountCategory::Liability),
            b'4' => prop_assert_eq!(c.category, AccountCategory::Equity),
            // 5xx-9xx codes off the chart default to Asset.
            _ => prop_assert!(
                chart.display_name(&code).is_some()
                    || c.category == AccountCategory::Asset
            ),
        }
    }

    /// Debit-normal flag always agrees with the category.
    #[test]
    fn prop_debit_normal_matches_category(code in numeric_code_strategy()) {
        let chart = ChartOfAccounts::vietnamese();
        let c = chart.classify(&code);
        prop_assert_eq!(
            c.category.is_debit_normal(),
            matches!(c.category, AccountCategory::Asset | AccountCategory::Expense)
        );
    }
}
