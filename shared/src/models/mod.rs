//! Domain models for the Ration Stock Management system

mod headcount;
mod report;
mod scale;
mod stock;

pub use headcount::*;
pub use report::*;
pub use scale::*;
pub use stock::*;
