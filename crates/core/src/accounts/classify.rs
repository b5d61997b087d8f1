//! Account classification.
//!
//! Maps a raw account code (e.g. "131", "511") to its category, subtype,
//! and display name. Classification is a pure function of the code and the
//! injected chart: an exact lookup against the chart's table first, then
//! prefix rules for codes the chart does not know. It never fails; codes
//! nothing matches default to Asset / Other Asset.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level account category.
///
/// The category fixes the sign convention: Asset and Expense accounts are
/// debit-normal, Liability, Equity, and Revenue accounts are credit-normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    /// Asset account.
    Asset,
    /// Liability account.
    Liability,
    /// Equity account.
    Equity,
    /// Revenue account.
    Revenue,
    /// Expense account.
    Expense,
}

impl AccountCategory {
    /// Returns true for accounts that increase with debits.
    #[must_use]
    pub const fn is_debit_normal(self) -> bool {
        matches!(self, Self::Asset | Self::Expense)
    }

    /// Signed balance for the category's normal side.
    ///
    /// Debit-normal: `debit - credit`. Credit-normal: `credit - debit`.
    #[must_use]
    pub fn signed_balance(self, debit: Decimal, credit: Decimal) -> Decimal {
        if self.is_debit_normal() {
            debit - credit
        } else {
            credit - debit
        }
    }
}

/// Fine-grained account subtype.
///
/// Balance-sheet subtypes drive section routing; profit-and-loss subtypes
/// drive the profit summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountSubtype {
    /// Cash, receivables, inventory, and other short-term assets.
    CurrentAsset,
    /// Tangible and intangible fixed assets, construction in progress.
    FixedAsset,
    /// Long-term investments, prepayments, anything else on the asset side.
    OtherAsset,
    /// Payables, taxes, payroll, and other short-term obligations.
    CurrentLiability,
    /// Borrowings and bonds beyond one year.
    LongTermLiability,
    /// Provisions and other obligations outside the two buckets above.
    OtherLiability,
    /// Contributed capital and share premium.
    OwnerEquity,
    /// Undistributed post-tax profit.
    RetainedEarnings,
    /// Funds, treasury shares, and other equity positions.
    OtherEquity,
    /// Sales of goods and services.
    OperatingRevenue,
    /// Interest and other financial income.
    FinancialIncome,
    /// Income outside ordinary activities.
    OtherIncome,
    /// Cost of goods sold.
    CostOfSales,
    /// Selling expenses.
    SellingExpense,
    /// General and administrative expenses.
    AdministrativeExpense,
    /// Interest and other financial expenses.
    FinancialExpense,
    /// Expenses outside ordinary activities.
    OtherExpense,
    /// Corporate income tax expense.
    IncomeTaxExpense,
}

/// Derived classification of one account code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountClassification {
    /// Top-level category.
    pub category: AccountCategory,
    /// Fine-grained subtype.
    pub subtype: AccountSubtype,
    /// Display name (chart name, or a synthesized one for unknown codes).
    pub display_name: String,
}

/// Second-digit pairs marking a `1xx` code as a current asset.
const CURRENT_ASSET_PAIRS: &[&str] = &[
    "01", "11", "12", "13", "21", "28", "31", "32", "33", "36", "38", "41", "51", "52", "53",
    "54", "55", "56", "57",
];

/// Second-digit pairs marking a `2xx` code as a fixed asset.
const FIXED_ASSET_PAIRS: &[&str] = &["11", "12", "13", "15", "17", "21", "22", "28", "41", "42"];

/// Second-digit pairs marking a `3xx` code as a current liability.
const CURRENT_LIABILITY_PAIRS: &[&str] = &["31", "33", "34", "38"];

/// Second-digit pairs marking a `3xx` code as a long-term liability.
const LONG_TERM_LIABILITY_PAIRS: &[&str] = &["41", "42"];

/// Second-digit pairs marking a `4xx` code as owner equity.
const OWNER_EQUITY_PAIRS: &[&str] = &["11", "12", "13"];

/// Second-digit pairs marking a `4xx` code as retained earnings.
const RETAINED_EARNINGS_PAIRS: &[&str] = &["21", "22"];

/// The well-known Vietnamese chart entries: code, category, subtype, name.
const VIETNAMESE_ENTRIES: &[(&str, AccountCategory, AccountSubtype, &str)] = &[
    // Current assets
    ("101", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Tiền mặt"),
    ("111", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Tiền mặt tại quỹ"),
    ("112", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Tiền gửi ngân hàng"),
    ("113", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Tiền đang chuyển"),
    ("121", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Chứng khoán kinh doanh"),
    ("128", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Đầu tư nắm giữ đến ngày đáo hạn"),
    ("131", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Phải thu của khách hàng"),
    ("133", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Thuế GTGT được khấu trừ"),
    ("136", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Phải thu nội bộ"),
    ("138", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Phải thu khác"),
    ("141", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Tạm ứng"),
    ("151", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Hàng mua đang đi đường"),
    ("152", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Nguyên liệu, vật liệu"),
    ("153", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Công cụ, dụng cụ"),
    ("154", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Chi phí sản xuất, kinh doanh dở dang"),
    ("155", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Thành phẩm"),
    ("156", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Hàng hóa"),
    ("157", AccountCategory::Asset, AccountSubtype::CurrentAsset, "Hàng gửi đi bán"),
    // Fixed assets
    ("211", AccountCategory::Asset, AccountSubtype::FixedAsset, "Tài sản cố định hữu hình"),
    ("212", AccountCategory::Asset, AccountSubtype::FixedAsset, "Tài sản cố định thuê tài chính"),
    ("213", AccountCategory::Asset, AccountSubtype::FixedAsset, "Tài sản cố định vô hình"),
    ("214", AccountCategory::Asset, AccountSubtype::FixedAsset, "Hao mòn tài sản cố định"),
    ("217", AccountCategory::Asset, AccountSubtype::FixedAsset, "Bất động sản đầu tư"),
    ("241", AccountCategory::Asset, AccountSubtype::FixedAsset, "Xây dựng cơ bản dở dang"),
    // Other assets
    ("221", AccountCategory::Asset, AccountSubtype::OtherAsset, "Đầu tư vào công ty con"),
    ("222", AccountCategory::Asset, AccountSubtype::OtherAsset, "Đầu tư vào công ty liên doanh, liên kết"),
    ("228", AccountCategory::Asset, AccountSubtype::OtherAsset, "Đầu tư khác"),
    ("242", AccountCategory::Asset, AccountSubtype::OtherAsset, "Chi phí trả trước"),
    // Current liabilities
    ("331", AccountCategory::Liability, AccountSubtype::CurrentLiability, "Phải trả cho người bán"),
    ("333", AccountCategory::Liability, AccountSubtype::CurrentLiability, "Thuế và các khoản phải nộp Nhà nước"),
    ("334", AccountCategory::Liability, AccountSubtype::CurrentLiability, "Phải trả người lao động"),
    ("335", AccountCategory::Liability, AccountSubtype::CurrentLiability, "Chi phí phải trả"),
    ("336", AccountCategory::Liability, AccountSubtype::CurrentLiability, "Phải trả nội bộ"),
    ("338", AccountCategory::Liability, AccountSubtype::CurrentLiability, "Phải trả, phải nộp khác"),
    // Long-term liabilities
    ("341", AccountCategory::Liability, AccountSubtype::LongTermLiability, "Vay và nợ thuê tài chính"),
    ("343", AccountCategory::Liability, AccountSubtype::LongTermLiability, "Trái phiếu phát hành"),
    // Other liabilities
    ("347", AccountCategory::Liability, AccountSubtype::OtherLiability, "Thuế thu nhập hoãn lại phải trả"),
    ("352", AccountCategory::Liability, AccountSubtype::OtherLiability, "Dự phòng phải trả"),
    // Owner equity
    ("411", AccountCategory::Equity, AccountSubtype::OwnerEquity, "Vốn đầu tư của chủ sở hữu"),
    ("412", AccountCategory::Equity, AccountSubtype::OwnerEquity, "Thặng dư vốn cổ phần"),
    ("413", AccountCategory::Equity, AccountSubtype::OwnerEquity, "Chênh lệch tỷ giá hối đoái"),
    // Retained earnings
    ("421", AccountCategory::Equity, AccountSubtype::RetainedEarnings, "Lợi nhuận sau thuế chưa phân phối"),
    // Other equity
    ("418", AccountCategory::Equity, AccountSubtype::OtherEquity, "Các quỹ khác thuộc vốn chủ sở hữu"),
    ("419", AccountCategory::Equity, AccountSubtype::OtherEquity, "Cổ phiếu quỹ"),
    ("431", AccountCategory::Equity, AccountSubtype::OtherEquity, "Quỹ khen thưởng, phúc lợi"),
    ("441", AccountCategory::Equity, AccountSubtype::OtherEquity, "Nguồn vốn đầu tư xây dựng cơ bản"),
    // Revenue
    ("511", AccountCategory::Revenue, AccountSubtype::OperatingRevenue, "Doanh thu bán hàng và cung cấp dịch vụ"),
    ("515", AccountCategory::Revenue, AccountSubtype::FinancialIncome, "Doanh thu hoạt động tài chính"),
    ("521", AccountCategory::Revenue, AccountSubtype::OperatingRevenue, "Các khoản giảm trừ doanh thu"),
    ("711", AccountCategory::Revenue, AccountSubtype::OtherIncome, "Thu nhập khác"),
    // Expenses
    ("632", AccountCategory::Expense, AccountSubtype::CostOfSales, "Giá vốn hàng bán"),
    ("635", AccountCategory::Expense, AccountSubtype::FinancialExpense, "Chi phí tài chính"),
    ("641", AccountCategory::Expense, AccountSubtype::SellingExpense, "Chi phí bán hàng"),
    ("642", AccountCategory::Expense, AccountSubtype::AdministrativeExpense, "Chi phí quản lý doanh nghiệp"),
    ("811", AccountCategory::Expense, AccountSubtype::OtherExpense, "Chi phí khác"),
    ("821", AccountCategory::Expense, AccountSubtype::IncomeTaxExpense, "Chi phí thuế thu nhập doanh nghiệp"),
];

static VIETNAMESE_CHART: Lazy<Arc<ChartOfAccounts>> =
    Lazy::new(|| Arc::new(ChartOfAccounts::vietnamese()));

/// Immutable chart of accounts backing classification.
///
/// Built once and injected into the engine and generators; nothing mutates
/// it after construction.
#[derive(Debug, Clone)]
pub struct ChartOfAccounts {
    exact: HashMap<String, (AccountCategory, AccountSubtype, String)>,
    unknown_prefix: String,
}

impl ChartOfAccounts {
    /// Builds the standard Vietnamese chart.
    #[must_use]
    pub fn vietnamese() -> Self {
        let exact = VIETNAMESE_ENTRIES
            .iter()
            .map(|(code, category, subtype, name)| {
                ((*code).to_string(), (*category, *subtype, (*name).to_string()))
            })
            .collect();
        Self {
            exact,
            unknown_prefix: "Tài khoản".to_string(),
        }
    }

    /// A process-wide shared copy of the Vietnamese chart.
    #[must_use]
    pub fn shared_vietnamese() -> Arc<Self> {
        Arc::clone(&VIETNAMESE_CHART)
    }

    /// Replaces the display-name prefix synthesized for unknown codes.
    #[must_use]
    pub fn with_unknown_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.unknown_prefix = prefix.into();
        self
    }

    /// The chart's display name for a code, exact matches only.
    #[must_use]
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.exact.get(code).map(|(_, _, name)| name.as_str())
    }

    /// Classifies an account code.
    ///
    /// Exact chart entries win; otherwise the code's first digit picks the
    /// category and its second digit pair picks the subtype. Codes nothing
    /// matches default to Asset / Other Asset.
    #[must_use]
    pub fn classify(&self, code: &str) -> AccountClassification {
        if let Some((category, subtype, name)) = self.exact.get(code) {
            return AccountClassification {
                category: *category,
                subtype: *subtype,
                display_name: name.clone(),
            };
        }

        let pair = code.get(1..3);
        let in_set = |set: &[&str]| pair.is_some_and(|p| set.contains(&p));

        let (category, subtype) = match code.get(0..1) {
            Some("1") => {
                if in_set(CURRENT_ASSET_PAIRS) {
                    (AccountCategory::Asset, AccountSubtype::CurrentAsset)
                } else {
                    (AccountCategory::Asset, AccountSubtype::OtherAsset)
                }
            }
            Some("2") => {
                if in_set(FIXED_ASSET_PAIRS) {
                    (AccountCategory::Asset, AccountSubtype::FixedAsset)
                } else {
                    (AccountCategory::Asset, AccountSubtype::OtherAsset)
                }
            }
            Some("3") => {
                if in_set(CURRENT_LIABILITY_PAIRS) {
                    (AccountCategory::Liability, AccountSubtype::CurrentLiability)
                } else if in_set(LONG_TERM_LIABILITY_PAIRS) {
                    (AccountCategory::Liability, AccountSubtype::LongTermLiability)
                } else {
                    (AccountCategory::Liability, AccountSubtype::OtherLiability)
                }
            }
            Some("4") => {
                if in_set(OWNER_EQUITY_PAIRS) {
                    (AccountCategory::Equity, AccountSubtype::OwnerEquity)
                } else if in_set(RETAINED_EARNINGS_PAIRS) {
                    (AccountCategory::Equity, AccountSubtype::RetainedEarnings)
                } else {
                    (AccountCategory::Equity, AccountSubtype::OtherEquity)
                }
            }
            _ => (AccountCategory::Asset, AccountSubtype::OtherAsset),
        };

        AccountClassification {
            category,
            subtype,
            display_name: format!("{} {code}", self.unknown_prefix),
        }
    }

    /// Shorthand for the classified category of a code.
    #[must_use]
    pub fn category_of(&self, code: &str) -> AccountCategory {
        self.classify(code).category
    }
}
