use crate::shared::http;
use async_trait::async_trait;
use contracts::dashboards::d400_profitability::{
    calculate_price_path, MarginRatio, ProfitabilityGateway, ProfitabilityResult,
};
use contracts::domain::a005_order::aggregate::OrderId;
use contracts::shared::api_error::ApiError;

/// Pricing endpoint of the API
#[derive(Clone, Copy, Default)]
pub struct HttpProfitability;

#[async_trait(?Send)]
impl ProfitabilityGateway for HttpProfitability {
    async fn calculate_price(
        &self,
        order_id: OrderId,
        ratio: MarginRatio,
    ) -> Result<ProfitabilityResult, ApiError> {
        http::get_json(&calculate_price_path(order_id, ratio)).await
    }
}

/// Suggested price of one order at `margin_percent`
pub async fn calculate(order_id: OrderId, margin_percent: f64) -> Result<ProfitabilityResult, ApiError> {
    contracts::dashboards::d400_profitability::calculate(&HttpProfitability, order_id, margin_percent / 100.0)
        .await
}
