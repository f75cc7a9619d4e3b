use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Suggested pricing for one order, as returned by
/// `GET /api/v1/rentabilidad/calcular-precio/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityResult {
    /// Production cost of the order
    #[serde(rename = "costo_produccion")]
    pub production_cost: f64,
    /// Requested margin as display text, e.g. "30.0%"
    #[serde(rename = "rentabilidad_solicitada", default)]
    pub requested_margin: String,
    #[serde(rename = "precio_venta_sugerido")]
    pub suggested_price: f64,
    /// Profit in pesos at the suggested price
    #[serde(rename = "margen_ganancia")]
    pub profit_margin: f64,
    #[serde(rename = "desglose_costos", default)]
    pub cost_breakdown: BTreeMap<String, String>,
    #[serde(rename = "recomendaciones", default)]
    pub recommendations: Vec<String>,
}
