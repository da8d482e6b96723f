//! Business logic services for the Ration Stock Management server

pub mod headcount;
pub mod report;
pub mod scale;
pub mod stock_item;
pub mod transaction;

pub use headcount::HeadcountService;
pub use report::ReportService;
pub use scale::ScaleService;
pub use stock_item::StockItemService;
pub use transaction::TransactionService;
