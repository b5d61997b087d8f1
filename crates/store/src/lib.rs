//! In-memory [`LedgerStore`] implementation.
//!
//! Backs integration tests and the demo binary with a seedable, immutable
//! snapshot of the books. Production deployments implement the same trait
//! against their own data service.
//!
//! [`LedgerStore`]: quanso_core::ledger::LedgerStore

pub mod memory;

pub use memory::{LineInput, MemoryLedger, MemoryLedgerBuilder};
