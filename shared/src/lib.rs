//! Shared types and models for the Ration Stock Management system
//!
//! This crate contains the domain records, the daily stock movement
//! reconstruction engine, and validation helpers shared between the
//! backend and any other components of the system.

pub mod ledger;
pub mod models;
pub mod types;
pub mod validation;

pub use ledger::*;
pub use models::*;
pub use types::*;
pub use validation::*;
