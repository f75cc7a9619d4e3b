use super::api::{self, HttpCatalog};
use crate::domain::a001_material_type::api as material_type_api;
use crate::shared::config::config;
use contracts::domain::a001_material_type::aggregate::{MaterialType, MaterialTypeId};
use contracts::domain::a002_material_reference::aggregate::MaterialReferenceId;
use contracts::domain::a003_color::aggregate::ColorId;
use contracts::domain::a004_design::aggregate::{Design, DesignId};
use contracts::domain::common::AggregateId;
use contracts::shared::action_status::ActionStatus;
use contracts::shared::api_error::ApiError;
use contracts::usecases::u501_curtain_quote::{
    submit_quote, CatalogSource, QuoteForm, QuoteSummary, ResetPolicy, SelectionState,
};
use leptos::prelude::*;

/// ViewModel of the curtain quote form.
///
/// Slot edits land in the selection signal synchronously; fetched catalog
/// lists are merged into it when they arrive.
#[derive(Clone)]
pub struct CurtainQuoteViewModel {
    pub form: RwSignal<QuoteForm>,
    pub selection: RwSignal<SelectionState>,
    pub designs: RwSignal<Vec<Design>>,
    pub material_types: RwSignal<Vec<MaterialType>>,
    pub status: RwSignal<ActionStatus>,
    pub summary: RwSignal<Option<QuoteSummary>>,
    reset_policy: ResetPolicy,
}

impl CurtainQuoteViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(QuoteForm::default()),
            selection: RwSignal::new(SelectionState::new()),
            designs: RwSignal::new(Vec::new()),
            material_types: RwSignal::new(Vec::new()),
            status: RwSignal::new(ActionStatus::default()),
            summary: RwSignal::new(None),
            reset_policy: config().quote.reset_policy(),
        }
    }

    /// Designs for the picker and material type names for slot headers
    pub fn load_catalog(&self) {
        let designs = self.designs;
        let material_types = self.material_types;
        let status = self.status;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_designs().await {
                Ok(items) => designs.set(items),
                Err(e) => status.update(|s| s.fail(format!("Error al cargar diseños: {}", e))),
            }
            match material_type_api::fetch_all().await {
                Ok(items) => material_types.set(items),
                Err(e) => log::warn!("material types unavailable for slot headers: {}", e),
            }
        });
    }

    pub fn material_type_name(&self, material_type_id: MaterialTypeId) -> String {
        self.material_types.with(|types| {
            types
                .iter()
                .find(|t| t.id == material_type_id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| format!("Insumo {}", material_type_id))
        })
    }

    /// Handle the design picker; the empty option clears the selection.
    ///
    /// On failure the picker goes back to the design still loaded.
    pub fn select_design(&self, raw: String) {
        let previous = self
            .selection
            .with_untracked(|s| s.design().map(|d| d.id.to_string()).unwrap_or_default());
        self.form.update(|f| f.design_id = raw.clone());
        self.status.update(|s| s.begin());
        if raw.trim().is_empty() {
            self.selection.update(|s| s.clear_design());
            self.status.update(|s| s.idle());
            return;
        }
        let design_id = match DesignId::from_string(&raw) {
            Ok(id) => id,
            Err(e) => {
                self.form.update(|f| f.design_id = previous);
                self.status.update(|s| s.fail_with(&ApiError::InvalidInput(e)));
                return;
            }
        };

        let form = self.form;
        let selection = self.selection;
        let status = self.status;
        wasm_bindgen_futures::spawn_local(async move {
            match HttpCatalog.fetch_design(design_id).await {
                Ok(design) => {
                    selection.update(|s| s.apply_design(design));
                    status.update(|s| s.idle());
                    load_missing_references(selection).await;
                }
                Err(e) => {
                    log::error!("design {} could not be loaded: {}", design_id, e);
                    form.update(|f| f.design_id = previous);
                    status.update(|s| s.fail_with(&e));
                }
            }
        });
    }

    /// Apply the reference right away; its colors arrive later
    pub fn set_slot_reference(&self, slot_index: usize, reference_id: Option<MaterialReferenceId>) {
        let mut pending = None;
        self.selection.update(|s| match s.set_slot_reference(slot_index, reference_id) {
            Ok(missing) => pending = missing,
            Err(e) => s.record_error(e.to_string()),
        });
        let Some(reference_id) = pending else {
            return;
        };

        let selection = self.selection;
        wasm_bindgen_futures::spawn_local(async move {
            match HttpCatalog.fetch_colors_by_reference(reference_id).await {
                Ok(colors) => selection.update(|s| s.store_colors(reference_id, colors)),
                Err(e) => selection.update(|s| s.record_error(format!("Error al cargar colores: {}", e))),
            }
        });
    }

    pub fn set_slot_color(&self, slot_index: usize, color_id: Option<ColorId>) {
        self.selection.update(|s| {
            if let Err(e) = s.set_slot_color(slot_index, color_id) {
                s.record_error(e.to_string());
            }
        });
    }

    pub fn is_busy(&self) -> bool {
        self.status.with(|s| s.busy)
    }

    /// Validate, send the quote and show the server-priced summary
    pub fn submit(&self) {
        let form = self.form;
        let selection = self.selection;
        let status = self.status;
        let summary = self.summary;
        let reset_policy = self.reset_policy;

        let current = form.get_untracked();
        let snapshot = selection.get_untracked();

        status.update(|s| s.begin());
        summary.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match submit_quote(&HttpCatalog, &current, &snapshot).await {
                Ok(order) => {
                    summary.set(Some(QuoteSummary::new(&order, snapshot.design())));
                    status.update(|s| s.succeed(format!("Cotización registrada: Orden #{}", order.id)));
                    if reset_policy == ResetPolicy::ResetForm {
                        selection.update(|sel| form.update(|f| reset_policy.apply(f, sel)));
                    }
                }
                Err(e) => {
                    log::warn!("quote rejected: {}", e);
                    status.update(|s| s.fail_with(&e));
                }
            }
        });
    }
}

/// Fetch references for the slot types not cached yet, merging each list
/// into the signal as it arrives.
async fn load_missing_references(selection: RwSignal<SelectionState>) {
    let missing = selection.with_untracked(|s| s.missing_reference_types());
    for material_type_id in missing {
        match HttpCatalog.fetch_references_by_type(material_type_id).await {
            Ok(items) => selection.update(|s| s.store_references(material_type_id, items)),
            Err(e) => selection.update(|s| {
                s.record_error(format!("Error al cargar referencias: {}", e))
            }),
        }
    }
}
