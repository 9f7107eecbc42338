//! Domain models.

pub mod industry;
pub mod job;

pub use industry::IndustryUsage;
pub use job::{JobDraft, JobRecord, RawJobRecord};
