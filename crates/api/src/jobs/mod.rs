//! Background jobs.

pub mod scheduler;
pub mod sweep_stale;

pub use scheduler::{Job, JobFrequency, JobScheduler};
pub use sweep_stale::SweepStalePostingsJob;
