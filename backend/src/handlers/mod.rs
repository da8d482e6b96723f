//! HTTP handlers for the Ration Stock Management server

pub mod headcount;
pub mod health;
pub mod report;
pub mod scale;
pub mod stock_item;
pub mod transaction;

pub use headcount::*;
pub use health::*;
pub use report::*;
pub use scale::*;
pub use stock_item::*;
pub use transaction::*;
