//! Domain layer for the ERP21 careers backend.
//!
//! This crate contains:
//! - Domain models (JobRecord, industry taxonomy views)
//! - The job lifecycle engine and taxonomy/catalog/export services
//! - The `JobStore` repository abstraction implemented by the persistence crate

pub mod models;
pub mod services;
pub mod store;
