//! Application configuration management.
//!
//! Reports carry no hardcoded display strings: every section label the
//! generators emit comes from [`ReportLabels`], which defaults to the
//! Vietnamese wording of the original statements and can be overridden
//! per field through config files or environment variables.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report generation configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Report generation configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Which account grouping the cash flow statement uses.
    pub cash_flow_preset: CashFlowPreset,
    /// Display labels for report sections and line items.
    pub labels: ReportLabels,
}

/// Named account groupings for the cash flow statement.
///
/// The two groupings come from the two original statement variants; they
/// intentionally differ in which accounts they watch and are never merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashFlowPreset {
    /// Vietnamese-standard grouping (the fuller account lists).
    #[default]
    Vas,
    /// General-ledger grouping (the leaner account lists).
    General,
}

/// Display labels for report sections and fixed line items.
///
/// Defaults are Vietnamese; any subset can be overridden in configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    /// Current assets section.
    pub current_assets: String,
    /// Fixed assets section.
    pub fixed_assets: String,
    /// Other assets section.
    pub other_assets: String,
    /// Current liabilities section.
    pub current_liabilities: String,
    /// Long-term liabilities section.
    pub long_term_liabilities: String,
    /// Other liabilities section.
    pub other_liabilities: String,
    /// Owner equity section.
    pub owner_equity: String,
    /// Retained earnings section.
    pub retained_earnings: String,
    /// Other equity section.
    pub other_equity: String,
    /// Operating activities section.
    pub operating_activities: String,
    /// Investing activities section.
    pub investing_activities: String,
    /// Financing activities section.
    pub financing_activities: String,
    /// Net income line item.
    pub net_income: String,
    /// Depreciation adjustment line item.
    pub depreciation: String,
    /// Cash at the start of the period.
    pub beginning_cash: String,
    /// Cash at the end of the period.
    pub ending_cash: String,
    /// Net change in cash over the period.
    pub net_change_in_cash: String,
    /// Prefix for line items where an account balance increased.
    pub increase_prefix: String,
    /// Prefix for line items where an account balance decreased.
    pub decrease_prefix: String,
    /// Display-name prefix for account codes missing from the chart.
    pub unknown_account_prefix: String,
    /// Fallback name for counterparties the store has no record of.
    pub unidentified_counterparty: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            current_assets: "Tài sản ngắn hạn".to_string(),
            fixed_assets: "Tài sản cố định".to_string(),
            other_assets: "Tài sản khác".to_string(),
            current_liabilities: "Nợ ngắn hạn".to_string(),
            long_term_liabilities: "Nợ dài hạn".to_string(),
            other_liabilities: "Nợ phải trả khác".to_string(),
            owner_equity: "Vốn chủ sở hữu".to_string(),
            retained_earnings: "Lợi nhuận chưa phân phối".to_string(),
            other_equity: "Nguồn vốn khác".to_string(),
            operating_activities: "Lưu chuyển tiền từ hoạt động kinh doanh".to_string(),
            investing_activities: "Lưu chuyển tiền từ hoạt động đầu tư".to_string(),
            financing_activities: "Lưu chuyển tiền từ hoạt động tài chính".to_string(),
            net_income: "Lợi nhuận thuần trong kỳ".to_string(),
            depreciation: "Khấu hao tài sản cố định".to_string(),
            beginning_cash: "Tiền và tương đương tiền đầu kỳ".to_string(),
            ending_cash: "Tiền và tương đương tiền cuối kỳ".to_string(),
            net_change_in_cash: "Lưu chuyển tiền thuần trong kỳ".to_string(),
            increase_prefix: "Tăng".to_string(),
            decrease_prefix: "Giảm".to_string(),
            unknown_account_prefix: "Tài khoản".to_string(),
            unidentified_counterparty: "Không xác định".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("QUANSO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_are_vietnamese() {
        let labels = ReportLabels::default();
        assert_eq!(labels.current_assets, "Tài sản ngắn hạn");
        assert_eq!(
            labels.operating_activities,
            "Lưu chuyển tiền từ hoạt động kinh doanh"
        );
        assert_eq!(labels.unidentified_counterparty, "Không xác định");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse("");
        assert_eq!(config.reporting.cash_flow_preset, CashFlowPreset::Vas);
        assert_eq!(
            config.reporting.labels.net_income,
            "Lợi nhuận thuần trong kỳ"
        );
    }

    #[test]
    fn test_preset_parses_from_lowercase() {
        let config = parse("[reporting]\ncash_flow_preset = \"general\"\n");
        assert_eq!(config.reporting.cash_flow_preset, CashFlowPreset::General);
    }

    #[test]
    fn test_partial_label_override_keeps_other_defaults() {
        let config = parse("[reporting.labels]\ncurrent_assets = \"Current assets\"\n");
        assert_eq!(config.reporting.labels.current_assets, "Current assets");
        assert_eq!(config.reporting.labels.fixed_assets, "Tài sản cố định");
    }
}
