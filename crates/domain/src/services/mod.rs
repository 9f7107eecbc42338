//! Business logic services.

pub mod catalog;
pub mod export;
pub mod lifecycle;
pub mod taxonomy;

pub use lifecycle::{LifecycleEngine, LifecycleError};
pub use taxonomy::{TaxonomyError, TaxonomyService};
