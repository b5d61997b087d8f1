//! Shared types, errors, and configuration for Quanso.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Report period type used by every statement generator
//! - Application-wide error types
//! - Configuration management with Vietnamese display labels

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CashFlowPreset, ReportLabels, ReportingConfig};
pub use error::{AppError, AppResult};
