//! Integration tests for balance sheet generation over the in-memory
//! store.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use quanso_core::accounts::ChartOfAccounts;
use quanso_core::ledger::SourceDocumentKind;
use quanso_core::reports::BalanceSheetService;
use quanso_shared::ReportLabels;
use quanso_shared::types::SourceDocumentId;
use quanso_store::{LineInput, MemoryLedger};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service(store: MemoryLedger) -> BalanceSheetService<MemoryLedger> {
    BalanceSheetService::new(
        Arc::new(store),
        ChartOfAccounts::shared_vietnamese(),
        ReportLabels::default(),
    )
}

// ============================================================================
// The fundamental accounting identity
// ============================================================================

#[tokio::test]
async fn test_identity_holds_for_balance_sheet_postings() {
    let mut builder = MemoryLedger::builder();
    // Capital contribution into the bank.
    builder.post_entry(
        date(2024, 1, 2),
        "Owner contribution",
        vec![
            LineInput::debit("112", dec!(50_000_000)),
            LineInput::credit("411", dec!(50_000_000)),
        ],
    );
    // Inventory bought on credit.
    builder.post_entry(
        date(2024, 1, 10),
        "Inventory purchase",
        vec![
            LineInput::debit("156", dec!(12_000_000)),
            LineInput::credit("331", dec!(12_000_000)),
        ],
    );
    // Long-term borrowing.
    builder.post_entry(
        date(2024, 1, 15),
        "Bank loan",
        vec![
            LineInput::debit("112", dec!(20_000_000)),
            LineInput::credit("341", dec!(20_000_000)),
        ],
    );
    let service = service(builder.build());

    let report = service.generate(date(2024, 1, 31)).await.unwrap();

    assert!(report.is_balanced);
    assert_eq!(report.total_assets, dec!(82_000_000));
    assert_eq!(report.total_liabilities, dec!(32_000_000));
    assert_eq!(report.total_equity, dec!(50_000_000));
    assert_eq!(
        report.total_liabilities_and_equity,
        report.total_liabilities + report.total_equity
    );
    assert_eq!(report.current_assets.total, dec!(82_000_000));
    assert_eq!(report.current_liabilities.total, dec!(12_000_000));
    assert_eq!(report.long_term_liabilities.total, dec!(20_000_000));
    assert_eq!(report.owner_equity.total, dec!(50_000_000));
    assert_eq!(report.entry_count, 3);
    assert_eq!(report.account_count, 5);
}

#[tokio::test]
async fn test_month_end_scenario_sections() {
    let mut builder = MemoryLedger::builder();
    builder.post_entry(
        date(2024, 1, 5),
        "Cash sale",
        vec![
            LineInput::debit("101", dec!(5_000_000)),
            LineInput::credit("511", dec!(5_000_000)),
        ],
    );
    builder.post_entry(
        date(2024, 1, 20),
        "Selling expense",
        vec![
            LineInput::debit("641", dec!(1_000_000)),
            LineInput::credit("101", dec!(1_000_000)),
        ],
    );
    let service = service(builder.build());

    let report = service.generate(date(2024, 1, 31)).await.unwrap();

    // Revenue and expense balances never enter the sheet; only the net
    // cash position shows, so the identity gap stays visible.
    assert_eq!(report.total_assets, dec!(4_000_000));
    assert_eq!(report.current_assets.accounts.len(), 1);
    assert_eq!(report.current_assets.accounts[0].account_code, "101");
    assert_eq!(report.total_equity, Decimal::ZERO);
    assert!(!report.is_balanced);
    assert_eq!(report.account_count, 3);
    assert_eq!(report.entry_count, 2);
}

// ============================================================================
// Counters
// ============================================================================

#[tokio::test]
async fn test_transaction_count_is_distinct_documents() {
    let invoice = SourceDocumentId::new();
    let memo = SourceDocumentId::new();
    let mut builder = MemoryLedger::builder();
    builder.post_entry(
        date(2024, 1, 5),
        "Invoice posting",
        vec![
            LineInput::debit("131", dec!(3_000_000))
                .from_document(invoice, SourceDocumentKind::Invoice),
            LineInput::credit("511", dec!(3_000_000))
                .from_document(invoice, SourceDocumentKind::Invoice),
        ],
    );
    builder.post_entry(
        date(2024, 1, 8),
        "Credit memo",
        vec![
            LineInput::debit("511", dec!(500_000))
                .from_document(memo, SourceDocumentKind::CreditMemo),
            LineInput::credit("131", dec!(500_000))
                .from_document(memo, SourceDocumentKind::CreditMemo),
        ],
    );
    // Manual adjustment with no source document does not count.
    builder.post_entry(
        date(2024, 1, 9),
        "Adjustment",
        vec![
            LineInput::debit("101", dec!(100_000)),
            LineInput::credit("411", dec!(100_000)),
        ],
    );
    let service = service(builder.build());

    let report = service.generate(date(2024, 1, 31)).await.unwrap();

    assert_eq!(report.transaction_count, 2);
    assert_eq!(report.entry_count, 3);
}

// ============================================================================
// Configured labels
// ============================================================================

#[tokio::test]
async fn test_unknown_account_prefix_override_reaches_account_names() {
    let mut builder = MemoryLedger::builder();
    builder.post_entry(
        date(2024, 1, 5),
        "Deposit on an off-chart account",
        vec![
            LineInput::debit("198", dec!(2_000_000)),
            LineInput::credit("411", dec!(2_000_000)),
        ],
    );

    let labels = ReportLabels {
        unknown_account_prefix: "Account".to_string(),
        ..ReportLabels::default()
    };
    let chart = ChartOfAccounts::vietnamese()
        .with_unknown_prefix(labels.unknown_account_prefix.as_str());
    let service = BalanceSheetService::new(Arc::new(builder.build()), Arc::new(chart), labels);

    let report = service.generate(date(2024, 1, 31)).await.unwrap();

    // "198" is off the chart; its synthesized name carries the configured
    // prefix instead of the Vietnamese default.
    assert_eq!(report.other_assets.accounts.len(), 1);
    assert_eq!(report.other_assets.accounts[0].account_name, "Account 198");
}

// ============================================================================
// Empty ledger
// ============================================================================

#[tokio::test]
async fn test_empty_ledger_is_vacuously_balanced() {
    let service = service(MemoryLedger::empty());

    let report = service.generate(date(2024, 1, 31)).await.unwrap();

    assert!(report.is_balanced);
    assert_eq!(report.total_assets, Decimal::ZERO);
    assert_eq!(report.total_liabilities_and_equity, Decimal::ZERO);
    assert!(report.current_assets.accounts.is_empty());
    assert!(report.retained_earnings.accounts.is_empty());
    assert_eq!(report.account_count, 0);
    assert_eq!(report.entry_count, 0);
    assert_eq!(report.transaction_count, 0);
}

#[tokio::test]
async fn test_generation_is_idempotent() {
    let mut builder = MemoryLedger::builder();
    builder.post_entry(
        date(2024, 1, 2),
        "Owner contribution",
        vec![
            LineInput::debit("112", dec!(50_000_000)),
            LineInput::credit("411", dec!(50_000_000)),
        ],
    );
    let service = service(builder.build());

    let first = service.generate(date(2024, 1, 31)).await.unwrap();
    let second = service.generate(date(2024, 1, 31)).await.unwrap();

    assert_eq!(first, second);
}
