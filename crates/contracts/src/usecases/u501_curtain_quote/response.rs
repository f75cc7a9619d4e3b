use crate::domain::a004_design::aggregate::Design;
use crate::domain::a005_order::aggregate::{Order, OrderId};

const NOT_SPECIFIED: &str = "No especificado";

/// Quotation card shown after a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSummary {
    pub order_id: OrderId,
    pub design_name: String,
    pub width: f64,
    pub height: f64,
    pub multiplier: i32,
    pub split: bool,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    /// Server-computed final price
    pub total_cost: f64,
}

fn or_not_specified(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_SPECIFIED)
        .to_string()
}

impl QuoteSummary {
    pub fn new(order: &Order, design: Option<&Design>) -> Self {
        Self {
            order_id: order.id,
            design_name: design
                .map(|d| d.name.clone())
                .unwrap_or_else(|| "Diseño no especificado".to_string()),
            width: order.width,
            height: order.height,
            multiplier: order.multiplier,
            split: order.split,
            client_name: or_not_specified(&order.client_name),
            client_phone: or_not_specified(&order.client_phone),
            client_email: or_not_specified(&order.client_email),
            total_cost: order.total_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_curtain_quote::selection::fixtures::design;

    #[test]
    fn test_summary_uses_server_cost_and_fallbacks() {
        let order: Order = serde_json::from_str(
            r#"{"id": 40, "diseno_id": 3, "ancho": 150.0, "alto": 220.0, "costo_total": 187500.5,
                "fecha_creacion": "2024-06-01T09:30:00", "cliente": "Ana", "telefono": ""}"#,
        )
        .unwrap();

        let summary = QuoteSummary::new(&order, Some(&design(3, &[1])));
        assert_eq!(summary.design_name, "Diseño 3");
        assert_eq!(summary.total_cost, 187500.5);
        assert_eq!(summary.client_name, "Ana");
        assert_eq!(summary.client_phone, NOT_SPECIFIED);
        assert_eq!(summary.client_email, NOT_SPECIFIED);
        assert_eq!(summary.multiplier, 1);

        let summary = QuoteSummary::new(&order, None);
        assert_eq!(summary.design_name, "Diseño no especificado");
    }
}
