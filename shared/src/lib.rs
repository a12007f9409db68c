//! FitJourney Shared Library
//!
//! This crate contains the domain types and pure health-metric formulas
//! shared between the backend and any future frontend clients. It performs
//! no I/O.

pub mod health_metrics;
pub mod models;
pub mod types;

// Re-export commonly used items
pub use health_metrics::*;
pub use models::*;
pub use types::*;
