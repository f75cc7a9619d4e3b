//! Quote form validation, payload assembly and submission.

use super::gateway::QuoteGateway;
use super::selection::SelectionState;
use crate::domain::a001_material_type::aggregate::MaterialTypeId;
use crate::domain::a002_material_reference::aggregate::MaterialReferenceId;
use crate::domain::a003_color::aggregate::ColorId;
use crate::domain::a004_design::aggregate::DesignId;
use crate::domain::a005_order::aggregate::Order;
use crate::domain::common::AggregateId;
use crate::shared::api_error::{ApiError, ValidationFailure};
use serde::{Deserialize, Serialize};

/// Smallest accepted width/height, in centimeters
pub const MIN_DIMENSION_CM: f64 = 20.0;
/// Largest accepted width/height, in centimeters
pub const MAX_DIMENSION_CM: f64 = 500.0;
pub const MIN_MULTIPLIER: i32 = 1;
pub const MAX_MULTIPLIER: i32 = 10;

/// Raw form inputs, kept as text exactly as the controls report them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteForm {
    pub design_id: String,
    pub width: String,
    pub height: String,
    pub split: bool,
    pub multiplier: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub notes: String,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self {
            design_id: String::new(),
            width: String::new(),
            height: String::new(),
            split: false,
            multiplier: MIN_MULTIPLIER.to_string(),
            client_name: String::new(),
            client_phone: String::new(),
            client_email: String::new(),
            notes: String::new(),
        }
    }
}

/// One material line of the order-creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteMaterial {
    pub tipo_insumo_id: MaterialTypeId,
    pub referencia_id: MaterialReferenceId,
    pub color_id: ColorId,
    pub cantidad_por_metro: f64,
}

/// Body of `POST /api/v1/cortinas/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub diseno_id: DesignId,
    pub ancho: f64,
    pub alto: f64,
    pub cliente: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub partida: bool,
    pub multiplicador: i32,
    pub tipos_insumo: Vec<QuoteMaterial>,
    pub notas: String,
}

/// What happens to the form after a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Leave inputs as they were so a similar quote can follow
    #[default]
    KeepForm,
    /// Start over with an empty form and no design
    ResetForm,
}

impl ResetPolicy {
    pub fn from_flag(reset_after_submit: bool) -> Self {
        if reset_after_submit {
            ResetPolicy::ResetForm
        } else {
            ResetPolicy::KeepForm
        }
    }

    pub fn apply(&self, form: &mut QuoteForm, selection: &mut SelectionState) {
        if *self == ResetPolicy::ResetForm {
            *form = QuoteForm::default();
            selection.clear_design();
        }
    }
}

fn parse_dimension(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn check_dimension(raw: &str, field: &'static str, failures: &mut Vec<ValidationFailure>) {
    if raw.trim().is_empty() {
        failures.push(ValidationFailure::MissingField(field));
        return;
    }
    match parse_dimension(raw) {
        None => failures.push(ValidationFailure::NotNumeric { field }),
        Some(value) if !(MIN_DIMENSION_CM..=MAX_DIMENSION_CM).contains(&value) => {
            failures.push(ValidationFailure::OutOfRange {
                field,
                value,
                min: MIN_DIMENSION_CM,
                max: MAX_DIMENSION_CM,
            })
        }
        Some(_) => {}
    }
}

/// Id of the loaded design, or `None` while the picker points elsewhere
/// (e.g. a design whose fetch has not finished or failed).
fn selected_design_id(form: &QuoteForm, selection: &SelectionState) -> Option<DesignId> {
    let loaded = selection.design()?.id;
    let picked = DesignId::from_string(&form.design_id).ok()?;
    (picked == loaded).then_some(loaded)
}

/// Collect every precondition failure; an empty list means submittable.
pub fn validate(form: &QuoteForm, selection: &SelectionState) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if form.design_id.trim().is_empty() || selection.design().is_none() {
        failures.push(ValidationFailure::DesignNotSelected);
    } else if selected_design_id(form, selection).is_none() {
        failures.push(ValidationFailure::DesignNotLoaded);
    }
    check_dimension(&form.width, "Ancho", &mut failures);
    check_dimension(&form.height, "Alto", &mut failures);

    for (index, slot) in selection.slots().iter().enumerate() {
        if !slot.is_complete() {
            failures.push(ValidationFailure::SlotIncomplete { slot: index });
        }
    }

    failures
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Coerce the form and the loaded design's slots into the wire payload.
///
/// Fails with `InvalidInput` when the form does not point at the loaded
/// design, a numeric field does not parse, the multiplier leaves `[1, 10]`,
/// or a slot lacks its reference or color.
pub fn build_payload(form: &QuoteForm, selection: &SelectionState) -> Result<QuoteRequest, ApiError> {
    let diseno_id = selected_design_id(form, selection).ok_or_else(|| {
        ApiError::InvalidInput(format!(
            "diseño '{}' no coincide con el diseño cargado",
            form.design_id
        ))
    })?;
    let ancho = parse_dimension(&form.width)
        .ok_or_else(|| ApiError::InvalidInput(format!("ancho '{}'", form.width)))?;
    let alto = parse_dimension(&form.height)
        .ok_or_else(|| ApiError::InvalidInput(format!("alto '{}'", form.height)))?;
    let multiplicador = form
        .multiplier
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|m| (MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(m))
        .ok_or_else(|| {
            ApiError::InvalidInput(format!(
                "multiplicador '{}' (debe ser un entero entre {} y {})",
                form.multiplier, MIN_MULTIPLIER, MAX_MULTIPLIER
            ))
        })?;

    let tipos_insumo = selection
        .slots()
        .iter()
        .enumerate()
        .map(|(index, slot)| match (slot.reference_id, slot.color_id) {
            (Some(referencia_id), Some(color_id)) => Ok(QuoteMaterial {
                tipo_insumo_id: slot.material_type_id,
                referencia_id,
                color_id,
                cantidad_por_metro: slot.quantity_per_meter,
            }),
            _ => Err(ApiError::InvalidInput(format!(
                "material #{} sin referencia o color",
                index + 1
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuoteRequest {
        diseno_id,
        ancho,
        alto,
        cliente: optional_text(&form.client_name),
        telefono: optional_text(&form.client_phone),
        email: optional_text(&form.client_email),
        partida: form.split,
        multiplicador,
        tipos_insumo,
        notas: form.notes.trim().to_string(),
    })
}

/// Validate, build and submit a quote in one step.
///
/// The returned order's `total_cost` is the server's figure; nothing here
/// recomputes it.
pub async fn submit_quote<G: QuoteGateway + ?Sized>(
    gateway: &G,
    form: &QuoteForm,
    selection: &SelectionState,
) -> Result<Order, ApiError> {
    let failures = validate(form, selection);
    if !failures.is_empty() {
        return Err(ApiError::Validation(failures));
    }
    let payload = build_payload(form, selection)?;
    log::info!(
        "submitting quote for design {} ({} x {} cm, {} materials)",
        payload.diseno_id,
        payload.ancho,
        payload.alto,
        payload.tipos_insumo.len()
    );
    let order = gateway.create_order(&payload).await?;
    log::info!("order {} created, total cost {}", order.id, order.total_cost);
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::action_status::ActionStatus;
    use crate::usecases::u501_curtain_quote::response::QuoteSummary;
    use crate::usecases::u501_curtain_quote::selection::fixtures::design;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Design 3 with slot `i` on reference `5 + i` and color `9 + i`
    fn filled_selection(type_ids: &[i64]) -> SelectionState {
        let mut selection = SelectionState::new();
        selection.apply_design(design(3, type_ids));
        for index in 0..type_ids.len() {
            let offset = index as i64;
            selection
                .set_slot_reference(index, Some(MaterialReferenceId(5 + offset)))
                .unwrap();
            selection.set_slot_color(index, Some(ColorId(9 + offset))).unwrap();
        }
        selection
    }

    fn valid_form() -> QuoteForm {
        QuoteForm {
            design_id: "3".into(),
            width: "150".into(),
            height: "220".into(),
            multiplier: "2".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_width_boundaries() {
        let selection = filled_selection(&[1]);
        for (width, ok) in [("15", false), ("19.99", false), ("20", true), ("500", true), ("500.01", false)] {
            let form = QuoteForm {
                width: width.into(),
                ..valid_form()
            };
            assert_eq!(validate(&form, &selection).is_empty(), ok, "width {}", width);
        }
    }

    #[test]
    fn test_width_15_reports_out_of_range() {
        let form = QuoteForm {
            width: "15".into(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form, &filled_selection(&[1])),
            vec![ValidationFailure::OutOfRange {
                field: "Ancho",
                value: 15.0,
                min: MIN_DIMENSION_CM,
                max: MAX_DIMENSION_CM,
            }]
        );
    }

    #[test]
    fn test_validate_collects_every_failure() {
        let form = QuoteForm {
            height: "alto".into(),
            ..QuoteForm::default()
        };
        let mut selection = filled_selection(&[2, 1]);
        selection.set_slot_reference(1, Some(MaterialReferenceId(6))).unwrap();
        assert_eq!(
            validate(&form, &selection),
            vec![
                ValidationFailure::DesignNotSelected,
                ValidationFailure::MissingField("Ancho"),
                ValidationFailure::NotNumeric { field: "Alto" },
                ValidationFailure::SlotIncomplete { slot: 1 },
            ]
        );
    }

    #[test]
    fn test_build_payload_coerces_strings_exactly() {
        let payload = build_payload(&valid_form(), &filled_selection(&[1])).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["diseno_id"], serde_json::json!(3));
        assert_eq!(value["multiplicador"], serde_json::json!(2));
        assert_eq!(
            value["tipos_insumo"],
            serde_json::json!([{
                "tipo_insumo_id": 1,
                "referencia_id": 5,
                "color_id": 9,
                "cantidad_por_metro": 1.0
            }])
        );
        assert_eq!(value["ancho"], serde_json::json!(150.0));
        assert_eq!(value["cliente"], serde_json::Value::Null);
        assert_eq!(value["notas"], serde_json::json!(""));
    }

    #[test]
    fn test_build_payload_rejects_bad_numbers() {
        let selection = filled_selection(&[1]);
        for form in [
            QuoteForm { design_id: "tres".into(), ..valid_form() },
            QuoteForm { multiplier: "0".into(), ..valid_form() },
            QuoteForm { multiplier: "11".into(), ..valid_form() },
            QuoteForm { multiplier: "1.5".into(), ..valid_form() },
            QuoteForm { height: "".into(), ..valid_form() },
        ] {
            assert!(matches!(
                build_payload(&form, &selection),
                Err(ApiError::InvalidInput(_))
            ));
        }

        let mut selection = filled_selection(&[1]);
        selection.set_slot_reference(0, None).unwrap();
        assert!(matches!(
            build_payload(&valid_form(), &selection),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_client_fields_trimmed_or_null() {
        let form = QuoteForm {
            client_name: "  Ana Gómez ".into(),
            client_phone: "   ".into(),
            client_email: "ana@example.com".into(),
            ..valid_form()
        };
        let payload = build_payload(&form, &filled_selection(&[])).unwrap();
        assert_eq!(payload.cliente.as_deref(), Some("Ana Gómez"));
        assert_eq!(payload.telefono, None);
        assert_eq!(payload.email.as_deref(), Some("ana@example.com"));
    }

    struct RejectingGateway {
        body: &'static str,
        seen: RefCell<Vec<QuoteRequest>>,
    }

    #[async_trait(?Send)]
    impl QuoteGateway for RejectingGateway {
        async fn create_order(&self, request: &QuoteRequest) -> Result<Order, ApiError> {
            self.seen.borrow_mut().push(request.clone());
            Err(ApiError::from_status(400, self.body))
        }
    }

    #[tokio::test]
    async fn test_rejection_detail_is_displayed_verbatim() {
        let gateway = RejectingGateway {
            body: r#"{"detail":"insufficient stock"}"#,
            seen: RefCell::new(Vec::new()),
        };
        let mut status = ActionStatus::default();
        status.succeed("previous quote");

        status.begin();
        match submit_quote(&gateway, &valid_form(), &filled_selection(&[1])).await {
            Ok(_) => status.succeed("Cortina creada exitosamente"),
            Err(err) => status.fail_with(&err),
        }

        assert_eq!(status.error.as_deref(), Some("insufficient stock"));
        assert_eq!(status.success, None);
        assert_eq!(gateway.seen.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_gateway() {
        let gateway = RejectingGateway {
            body: "{}",
            seen: RefCell::new(Vec::new()),
        };
        let form = QuoteForm {
            width: "15".into(),
            ..valid_form()
        };
        let err = submit_quote(&gateway, &form, &filled_selection(&[])).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(gateway.seen.borrow().is_empty());
    }

    #[test]
    fn test_form_pointing_at_another_design_is_not_submittable() {
        let selection = filled_selection(&[1, 2]);
        let form = QuoteForm {
            design_id: "7".into(),
            ..valid_form()
        };

        assert_eq!(
            validate(&form, &selection),
            vec![ValidationFailure::DesignNotLoaded]
        );
        assert!(matches!(
            build_payload(&form, &selection),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_design_still_loading_never_reaches_gateway() {
        let gateway = RejectingGateway {
            body: "{}",
            seen: RefCell::new(Vec::new()),
        };
        let form = QuoteForm {
            design_id: "7".into(),
            ..valid_form()
        };
        let err = submit_quote(&gateway, &form, &filled_selection(&[1, 2]))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation(vec![ValidationFailure::DesignNotLoaded])
        );
        assert!(gateway.seen.borrow().is_empty());
    }

    struct PricingGateway {
        seen: RefCell<Vec<QuoteRequest>>,
    }

    #[async_trait(?Send)]
    impl QuoteGateway for PricingGateway {
        async fn create_order(&self, request: &QuoteRequest) -> Result<Order, ApiError> {
            self.seen.borrow_mut().push(request.clone());
            let order = serde_json::from_str(
                r#"{"id": 41, "diseno_id": 3, "ancho": 150.0, "alto": 220.0, "multiplicador": 2,
                    "costo_total": 187500.5, "fecha_creacion": "2024-06-01T09:30:00",
                    "cliente": "Ana Gómez"}"#,
            )
            .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(order)
        }
    }

    #[tokio::test]
    async fn test_submit_sends_built_payload_and_keeps_server_cost() {
        let gateway = PricingGateway {
            seen: RefCell::new(Vec::new()),
        };
        let selection = filled_selection(&[1, 2]);
        let form = QuoteForm {
            client_name: "Ana Gómez".into(),
            ..valid_form()
        };

        let order = submit_quote(&gateway, &form, &selection).await.unwrap();

        assert_eq!(
            gateway.seen.borrow().as_slice(),
            &[build_payload(&form, &selection).unwrap()]
        );
        assert_eq!(order.total_cost, 187500.5);

        let summary = QuoteSummary::new(&order, selection.design());
        assert_eq!(summary.total_cost, 187500.5);
        assert_eq!(summary.design_name, "Diseño 3");
        assert_eq!(summary.client_name, "Ana Gómez");
        assert_eq!(summary.client_phone, "No especificado");
        assert_eq!(summary.multiplier, 2);
    }

    #[test]
    fn test_reset_policy() {
        let mut selection = SelectionState::new();
        selection.apply_design(design(3, &[1]));
        let mut form = valid_form();

        ResetPolicy::KeepForm.apply(&mut form, &mut selection);
        assert_eq!(form, valid_form());
        assert!(selection.design().is_some());

        ResetPolicy::from_flag(true).apply(&mut form, &mut selection);
        assert_eq!(form, QuoteForm::default());
        assert!(selection.design().is_none());
    }
}
