//! Quanso report generator.
//!
//! Seeds a small demo ledger into the in-memory store, runs every report
//! generator over it, and prints the results as JSON. Useful for eyeballing
//! report shapes without a backing data service.
//!
//! Usage: cargo run --bin reportgen

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quanso_core::accounts::ChartOfAccounts;
use quanso_core::analysis::RankingService;
use quanso_core::balance::BalanceEngine;
use quanso_core::ledger::{SourceDocumentKind, TransactionKind};
use quanso_core::reports::{
    BalanceSheetService, CashFlowService, ColumnarCashFlowView, IncomeService,
    IndirectCashFlowView, TrialBalanceService,
};
use quanso_shared::AppConfig;
use quanso_shared::types::{CounterpartyId, ReportPeriod};
use quanso_store::{LineInput, MemoryLedger};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

/// A December of setup and a January of trading.
fn seed_demo_ledger() -> MemoryLedger {
    let customer_a = CounterpartyId::new();
    let customer_b = CounterpartyId::new();
    let vendor = CounterpartyId::new();

    let mut builder = MemoryLedger::builder();

    builder.post_entry(
        date(2023, 12, 15),
        "Góp vốn thành lập",
        vec![
            LineInput::debit("112", dec!(100_000_000)),
            LineInput::credit("411", dec!(100_000_000)),
        ],
    );
    builder.post_entry(
        date(2024, 1, 4),
        "Mua hàng hóa nhập kho",
        vec![
            LineInput::debit("156", dec!(30_000_000)),
            LineInput::credit("331", dec!(30_000_000)),
        ],
    );
    builder.post_entry(
        date(2024, 1, 8),
        "Bán hàng thu tiền ngay",
        vec![
            LineInput::debit("112", dec!(25_000_000)),
            LineInput::credit("511", dec!(25_000_000)),
        ],
    );
    builder.post_entry(
        date(2024, 1, 8),
        "Giá vốn hàng bán",
        vec![
            LineInput::debit("632", dec!(15_000_000)),
            LineInput::credit("156", dec!(15_000_000)),
        ],
    );
    builder.post_entry(
        date(2024, 1, 15),
        "Bán chịu cho khách hàng",
        vec![
            LineInput::debit("131", dec!(18_000_000)),
            LineInput::credit("511", dec!(18_000_000)),
        ],
    );
    builder.post_entry(
        date(2024, 1, 22),
        "Chi phí bán hàng",
        vec![
            LineInput::debit("641", dec!(4_000_000)),
            LineInput::credit("112", dec!(4_000_000)),
        ],
    );
    builder.post_entry(
        date(2024, 1, 26),
        "Mua thiết bị văn phòng",
        vec![
            LineInput::debit("211", dec!(12_000_000)),
            LineInput::credit("112", dec!(12_000_000)),
        ],
    );
    // A draft that must not show up anywhere.
    builder.draft_entry(
        date(2024, 1, 30),
        "Bút toán nháp",
        vec![
            LineInput::debit("642", dec!(9_999_999)),
            LineInput::credit("112", dec!(9_999_999)),
        ],
    );

    builder
        .counterparty(customer_a, "Công ty TNHH An Phát", "KH001", Some("anphat@example.vn"))
        .counterparty(customer_b, "Cửa hàng Minh Tâm", "KH002", None)
        .counterparty(vendor, "Nhà cung cấp Hòa Bình", "NCC001", None);
    builder
        .transaction(customer_a, dec!(25_000_000), date(2024, 1, 8), SourceDocumentKind::SalesReceipt)
        .transaction(customer_b, dec!(18_000_000), date(2024, 1, 15), SourceDocumentKind::Invoice)
        .transaction(vendor, dec!(30_000_000), date(2024, 1, 4), SourceDocumentKind::Bill);

    builder.build()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quanso=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    let labels = config.reporting.labels.clone();
    let preset = config.reporting.cash_flow_preset;

    let store = Arc::new(seed_demo_ledger());
    let chart = Arc::new(
        ChartOfAccounts::vietnamese()
            .with_unknown_prefix(labels.unknown_account_prefix.as_str()),
    );
    info!(?preset, "demo ledger seeded");

    let as_of = date(2024, 1, 31);
    let period = ReportPeriod::new(date(2024, 1, 1), as_of);

    let trial = TrialBalanceService::new(BalanceEngine::new(Arc::clone(&store), Arc::clone(&chart)))
        .generate(as_of)
        .await?;
    println!("{}", serde_json::to_string_pretty(&trial)?);

    let balance_sheet =
        BalanceSheetService::new(Arc::clone(&store), Arc::clone(&chart), labels.clone())
            .generate(as_of)
            .await?;
    info!(balanced = balance_sheet.is_balanced, "balance sheet generated");
    println!("{}", serde_json::to_string_pretty(&balance_sheet)?);

    let cash_flow =
        CashFlowService::new(Arc::clone(&store), Arc::clone(&chart), preset, labels.clone())
            .generate(period)
            .await?;
    info!(validated = cash_flow.cash_flow_validation, "cash flow generated");
    println!("{}", serde_json::to_string_pretty(&cash_flow)?);
    println!(
        "{}",
        serde_json::to_string_pretty(&IndirectCashFlowView::from_statement(&cash_flow, &labels))?
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&ColumnarCashFlowView::from_statement(&cash_flow, &labels))?
    );

    let profit = IncomeService::new(Arc::clone(&store), Arc::clone(&chart))
        .summarize(period)
        .await?;
    println!("{}", serde_json::to_string_pretty(&profit)?);

    let ranking = RankingService::new(Arc::clone(&store), labels.clone());
    let sales = ranking.rank(period, TransactionKind::Sales, 10).await?;
    println!("{}", serde_json::to_string_pretty(&sales)?);
    let expenses = ranking.rank(period, TransactionKind::Expenses, 10).await?;
    println!("{}", serde_json::to_string_pretty(&expenses)?);

    Ok(())
}
