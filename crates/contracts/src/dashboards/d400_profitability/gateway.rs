use super::dto::ProfitabilityResult;
use super::pricing::MarginRatio;
use crate::domain::a005_order::aggregate::OrderId;
use crate::shared::api_error::ApiError;
use async_trait::async_trait;
use std::rc::Rc;

/// Remote pricing of an existing order
#[async_trait(?Send)]
pub trait ProfitabilityGateway {
    async fn calculate_price(
        &self,
        order_id: OrderId,
        ratio: MarginRatio,
    ) -> Result<ProfitabilityResult, ApiError>;
}

#[async_trait(?Send)]
impl<T: ProfitabilityGateway + ?Sized> ProfitabilityGateway for Rc<T> {
    async fn calculate_price(
        &self,
        order_id: OrderId,
        ratio: MarginRatio,
    ) -> Result<ProfitabilityResult, ApiError> {
        (**self).calculate_price(order_id, ratio).await
    }
}

pub fn calculate_price_path(order_id: OrderId, ratio: MarginRatio) -> String {
    format!(
        "/api/v1/rentabilidad/calcular-precio/{}?rentabilidad={}",
        order_id, ratio
    )
}

/// Suggested pricing of `order_id` at `margin_ratio`.
///
/// The ratio is checked before any request goes out.
pub async fn calculate<G: ProfitabilityGateway + ?Sized>(
    gateway: &G,
    order_id: OrderId,
    margin_ratio: f64,
) -> Result<ProfitabilityResult, ApiError> {
    let ratio = MarginRatio::new(margin_ratio)?;
    log::debug!("pricing order {} at margin {}", order_id, ratio);
    gateway.calculate_price(order_id, ratio).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_profitability::pricing::{suggest_price, MarginBasis};
    use std::cell::Cell;

    /// Prices a fixed order of cost 1000 the way the service does
    struct FixedOrder {
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl ProfitabilityGateway for FixedOrder {
        async fn calculate_price(
            &self,
            order_id: OrderId,
            ratio: MarginRatio,
        ) -> Result<ProfitabilityResult, ApiError> {
            self.calls.set(self.calls.get() + 1);
            if order_id != OrderId(1) {
                return Err(ApiError::from_status(
                    404,
                    r#"{"detail":"Cortina no encontrada"}"#,
                ));
            }
            suggest_price(1000.0, ratio, MarginBasis::OnCost)
        }
    }

    fn gateway() -> FixedOrder {
        FixedOrder { calls: Cell::new(0) }
    }

    #[test]
    fn test_path_carries_ratio() {
        let ratio = MarginRatio::new(0.3).unwrap();
        assert_eq!(
            calculate_price_path(OrderId(12), ratio),
            "/api/v1/rentabilidad/calcular-precio/12?rentabilidad=0.3"
        );
    }

    #[tokio::test]
    async fn test_known_order_is_priced() {
        let gw = gateway();
        let result = calculate(&gw, OrderId(1), 0.3).await.unwrap();
        assert_eq!(result.suggested_price, 1300.0);
    }

    #[tokio::test]
    async fn test_unknown_order_is_not_found() {
        let err = calculate(&gateway(), OrderId(99), 0.3).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_ratio_never_reaches_gateway() {
        let gw = gateway();
        for ratio in [0.0, 1.5, -0.2] {
            let err = calculate(&gw, OrderId(1), ratio).await.unwrap_err();
            assert!(matches!(err, ApiError::InvalidInput(_)));
        }
        assert_eq!(gw.calls.get(), 0);
    }
}
