//! Database models for the Ration Stock Management server
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
