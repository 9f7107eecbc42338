//! Shared utilities for the ERP21 careers backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Field validation helpers for job drafts
//! - Posting-date parsing and the staleness predicate

pub mod dates;
pub mod validation;
