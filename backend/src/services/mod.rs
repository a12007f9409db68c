//! Domain services composed from the provider adapters

pub mod plan;
pub mod quotes;

pub use plan::PlanService;
