//! Profitability: suggested sale price for an order and margin statistics.

pub mod dto;
pub mod gateway;
pub mod pricing;
pub mod statistics;

pub use dto::ProfitabilityResult;
pub use gateway::{calculate, calculate_price_path, ProfitabilityGateway};
pub use pricing::{suggest_price, MarginBasis, MarginRatio};
pub use statistics::{aggregate_statistics, ProfitabilityStatistics};
