//! Persistence layer for the ERP21 careers backend.
//!
//! This crate contains:
//! - `FileStore`: JSON files under a data directory, with a bootstrap
//!   snapshot fallback and legacy-record migration on first load
//! - `MemoryStore`: in-memory implementation for tests

pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

/// Industry labels seeded when no label list has been persisted yet.
pub const DEFAULT_INDUSTRIES: [&str; 6] = [
    "Oil & Gas",
    "Aerospace",
    "Defence",
    "Utility",
    "Shipping",
    "Healthcare",
];
