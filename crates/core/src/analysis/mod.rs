//! Counterparty concentration analysis.
//!
//! - Grouping raw transactions by counterparty
//! - Ranking, share percentages, and size segmentation
//! - Inequality metrics (Gini coefficient, concentration ratio)

pub mod concentration;
pub mod error;
pub mod ranking;

pub use concentration::{
    CounterpartySegment, concentration_ratio, decile_size, gini_coefficient, segment_for_rank,
};
pub use error::AnalysisError;
pub use ranking::{CounterpartyRanking, RankingReport, RankingService};
