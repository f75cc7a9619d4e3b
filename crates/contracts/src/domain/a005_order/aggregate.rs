use crate::domain::a004_design::aggregate::DesignId;
use crate::domain::common::AggregateRoot;
use crate::enums::order_state::{OrderState, TransitionError};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Id of an order (`cortinas`)
    OrderId
);

/// Curtain order as persisted by the pricing API.
///
/// `total_cost` is computed server-side and shown as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "diseno_id")]
    pub design_id: DesignId,
    /// Width in centimeters
    #[serde(rename = "ancho")]
    pub width: f64,
    /// Height in centimeters
    #[serde(rename = "alto")]
    pub height: f64,
    #[serde(rename = "partida", default)]
    pub split: bool,
    #[serde(rename = "multiplicador", default = "default_multiplier")]
    pub multiplier: i32,
    #[serde(rename = "estado", default)]
    pub state: OrderState,
    #[serde(rename = "costo_materiales", default)]
    pub materials_cost: Option<f64>,
    #[serde(rename = "costo_mano_obra", default)]
    pub labor_cost: Option<f64>,
    #[serde(rename = "costo_total")]
    pub total_cost: f64,
    /// Agreed sale price, when the service records one
    #[serde(rename = "precio_venta", default)]
    pub sale_price: Option<f64>,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "cliente", default)]
    pub client_name: Option<String>,
    #[serde(rename = "telefono", default)]
    pub client_phone: Option<String>,
    #[serde(rename = "email", default)]
    pub client_email: Option<String>,
}

fn default_multiplier() -> i32 {
    1
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        self.client_name.as_deref().unwrap_or("Sin cliente")
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "cortinas"
    }

    fn element_name() -> &'static str {
        "Orden"
    }

    fn list_name() -> &'static str {
        "Órdenes"
    }
}

/// Body of `PUT /api/v1/cortinas/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,
    #[serde(rename = "notas", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "cliente", skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    #[serde(rename = "email", skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
}

impl OrderUpdate {
    /// Update moving `order` to `next`, carrying its client fields along so
    /// the service does not blank them.
    pub fn state_change(order: &Order, next: OrderState) -> Result<Self, TransitionError> {
        let state = order.state.transition(next)?;
        Ok(Self {
            state: Some(state),
            notes: None,
            client_name: Some(order.client_name.clone().unwrap_or_default()),
            client_phone: Some(order.client_phone.clone().unwrap_or_default()),
            client_email: Some(order.client_email.clone().unwrap_or_default()),
        })
    }
}

/// Filters of the orders list, as picked in the UI
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub state: Option<OrderState>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}

/// Query string parameters of `GET /api/v1/cortinas/`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<OrderState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<NaiveDateTime>,
}

impl OrderFilter {
    /// Expand the picked days into an inclusive datetime window
    pub fn to_query(&self) -> OrderQuery {
        OrderQuery {
            estado: self.state,
            fecha_inicio: self.date_start.and_then(|d| d.and_hms_opt(0, 0, 0)),
            fecha_fin: self.date_end.and_then(|d| d.and_hms_opt(23, 59, 59)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_none() && self.date_start.is_none() && self.date_end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{
        "id": 12, "diseno_id": 3, "ancho": 150.0, "alto": 220.0,
        "partida": true, "multiplicador": 2, "estado": "produccion",
        "costo_materiales": 80000.0, "costo_mano_obra": 20000.0, "costo_total": 100000.0,
        "notas": null,
        "fecha_creacion": "2024-06-01T09:30:00", "fecha_actualizacion": "2024-06-01T09:30:00",
        "cliente": "Ana Gómez", "telefono": "3001234567", "email": null
    }"#;

    #[test]
    fn test_deserializes_order() {
        let order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(order.id, OrderId(12));
        assert_eq!(order.state, OrderState::Produccion);
        assert_eq!(order.total_cost, 100000.0);
        assert_eq!(order.sale_price, None);
        assert_eq!(order.client_email, None);
    }

    #[test]
    fn test_state_change_keeps_client_fields() {
        let order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        let update = OrderUpdate::state_change(&order, OrderState::Entregado).unwrap();
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "estado": "entregado",
                "cliente": "Ana Gómez",
                "telefono": "3001234567",
                "email": ""
            })
        );
    }

    #[test]
    fn test_filter_window_is_inclusive() {
        let filter = OrderFilter {
            state: Some(OrderState::Pendiente),
            date_start: NaiveDate::from_ymd_opt(2024, 3, 1),
            date_end: NaiveDate::from_ymd_opt(2024, 3, 31),
        };
        let query = filter.to_query();
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({
                "estado": "pendiente",
                "fecha_inicio": "2024-03-01T00:00:00",
                "fecha_fin": "2024-03-31T23:59:59"
            })
        );
        assert!(OrderFilter::default().is_empty());
    }
}
