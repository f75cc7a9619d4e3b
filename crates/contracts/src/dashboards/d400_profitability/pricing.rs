//! Margin arithmetic for the local price preview.
//!
//! Orders are priced by the API; this only runs when the user types a base
//! cost without picking an order.

use super::dto::ProfitabilityResult;
use crate::shared::api_error::ApiError;
use crate::shared::number_format::{format_money, round2};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_MARGIN_PERCENT: f64 = 30.0;
pub const DEFAULT_MINIMUM_MARGIN_PERCENT: f64 = 20.0;
const LOW_MARGIN: f64 = 0.20;
const HIGH_MARGIN: f64 = 0.50;

/// Target margin as a ratio in `(0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MarginRatio(f64);

impl MarginRatio {
    pub fn new(ratio: f64) -> Result<Self, ApiError> {
        if ratio.is_finite() && ratio > 0.0 && ratio <= 1.0 {
            Ok(Self(ratio))
        } else {
            Err(ApiError::InvalidInput(format!(
                "la rentabilidad debe estar entre 0 y 1 (valor: {})",
                ratio
            )))
        }
    }

    /// From a percentage input such as `30`
    pub fn from_percent(percent: f64) -> Result<Self, ApiError> {
        Self::new(percent / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    pub fn is_below(&self, minimum: MarginRatio) -> bool {
        self.0 < minimum.0
    }
}

impl fmt::Display for MarginRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the margin is a fraction of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginBasis {
    /// price = cost × (1 + r); the rule the pricing API applies
    #[default]
    OnCost,
    /// price = cost / (1 − r); margin as a share of the sale price
    OnPrice,
}

impl MarginBasis {
    pub fn sale_price(&self, cost: f64, ratio: MarginRatio) -> Result<f64, ApiError> {
        match self {
            MarginBasis::OnCost => Ok(cost * (1.0 + ratio.value())),
            MarginBasis::OnPrice => {
                let share = 1.0 - ratio.value();
                if share <= 0.0 {
                    return Err(ApiError::InvalidInput(
                        "un margen del 100% sobre el precio no es alcanzable".to_string(),
                    ));
                }
                Ok(cost / share)
            }
        }
    }
}

/// Advice attached to a suggested price
pub fn recommendations(ratio: MarginRatio, suggested_price: f64) -> Vec<String> {
    let mut items = Vec::new();
    if ratio.value() < LOW_MARGIN {
        items.push(
            "La rentabilidad deseada está por debajo del 20%, considere aumentarla \
             para mantener un margen saludable"
                .to_string(),
        );
    } else if ratio.value() > HIGH_MARGIN {
        items.push(
            "La rentabilidad deseada es alta, asegúrese de que el mercado pueda \
             absorber este precio"
                .to_string(),
        );
    }
    items.push(format!(
        "El precio sugerido de {} permite alcanzar la rentabilidad deseada del {}%",
        format_money(suggested_price),
        round2(ratio.percent())
    ));
    items
}

/// Price a typed base cost locally.
pub fn suggest_price(
    base_cost: f64,
    ratio: MarginRatio,
    basis: MarginBasis,
) -> Result<ProfitabilityResult, ApiError> {
    if !base_cost.is_finite() || base_cost <= 0.0 {
        return Err(ApiError::InvalidInput(format!(
            "el costo base debe ser mayor que 0 (valor: {})",
            base_cost
        )));
    }
    let price = basis.sale_price(base_cost, ratio)?;
    Ok(ProfitabilityResult {
        production_cost: round2(base_cost),
        requested_margin: format!("{}%", round2(ratio.percent())),
        suggested_price: round2(price),
        profit_margin: round2(price - base_cost),
        cost_breakdown: Default::default(),
        recommendations: recommendations(ratio, price),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_must_be_in_half_open_unit_interval() {
        assert!(MarginRatio::new(0.0).is_err());
        assert!(MarginRatio::new(-0.1).is_err());
        assert!(MarginRatio::new(1.01).is_err());
        assert!(MarginRatio::new(f64::NAN).is_err());
        assert!(MarginRatio::new(1.0).is_ok());
        assert_eq!(MarginRatio::from_percent(30.0).unwrap().value(), 0.3);
    }

    #[test]
    fn test_margin_on_price() {
        let result = suggest_price(1000.0, MarginRatio::new(0.3).unwrap(), MarginBasis::OnPrice).unwrap();
        assert_eq!(result.suggested_price, 1428.57);
        assert_eq!(result.profit_margin, 428.57);
    }

    #[test]
    fn test_margin_on_cost_matches_service_rule() {
        let result = suggest_price(1000.0, MarginRatio::new(0.3).unwrap(), MarginBasis::OnCost).unwrap();
        assert_eq!(result.suggested_price, 1300.0);
        assert_eq!(result.profit_margin, 300.0);
        assert_eq!(result.requested_margin, "30%");
    }

    #[test]
    fn test_full_margin_on_price_is_rejected() {
        let ratio = MarginRatio::new(1.0).unwrap();
        assert!(suggest_price(1000.0, ratio, MarginBasis::OnPrice).is_err());
        assert!(suggest_price(1000.0, ratio, MarginBasis::OnCost).is_ok());
        assert!(suggest_price(0.0, ratio, MarginBasis::OnCost).is_err());
    }

    #[test]
    fn test_recommendation_thresholds() {
        let low = recommendations(MarginRatio::new(0.1).unwrap(), 1100.0);
        assert_eq!(low.len(), 2);
        assert!(low[0].contains("por debajo del 20%"));

        let normal = recommendations(MarginRatio::new(0.3).unwrap(), 1300.0);
        assert_eq!(
            normal,
            vec!["El precio sugerido de $ 1.300,00 permite alcanzar la rentabilidad deseada del 30%".to_string()]
        );

        let high = recommendations(MarginRatio::new(0.6).unwrap(), 1600.0);
        assert!(high[0].contains("es alta"));
    }

    #[test]
    fn test_basis_config_names() {
        let basis: MarginBasis = serde_json::from_str("\"on_price\"").unwrap();
        assert_eq!(basis, MarginBasis::OnPrice);
        assert_eq!(MarginBasis::default(), MarginBasis::OnCost);
    }
}
