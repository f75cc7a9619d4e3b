use crate::shared::http;
use contracts::domain::a005_order::aggregate::{Order, OrderFilter, OrderUpdate};
use contracts::domain::common::AggregateRoot;
use contracts::enums::order_state::OrderState;
use contracts::shared::api_error::ApiError;

/// Orders matching the filter; an empty filter lists everything
pub async fn fetch_filtered(filter: &OrderFilter) -> Result<Vec<Order>, String> {
    http::get_json_with_query(&Order::collection_path(), &filter.to_query())
        .await
        .map_err(|e| e.to_string())
}

/// Move an order to `next`, keeping its client fields
pub async fn update_state(order: &Order, next: OrderState) -> Result<Order, ApiError> {
    let update = OrderUpdate::state_change(order, next)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    log::info!("order {}: {} -> {}", order.id, order.state, next);
    http::put_json(&Order::element_path(&order.id), &update).await
}
