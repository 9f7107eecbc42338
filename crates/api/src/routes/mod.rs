//! HTTP route handlers.

pub mod auth;
pub mod catalog;
pub mod export;
pub mod health;
pub mod industries;
pub mod jobs;
