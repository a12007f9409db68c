//! FitJourney Backend Library
//!
//! Recommendation aggregation service for daily fitness, nutrition, and
//! wellness plans. Layered as routes -> services -> provider adapters, with
//! a shared state built once at startup.

pub mod cache;
pub mod config;
pub mod error;
pub mod providers;
pub mod routes;
pub mod selection;
pub mod services;
pub mod state;
