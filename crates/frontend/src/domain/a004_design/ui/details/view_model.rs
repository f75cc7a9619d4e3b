use crate::domain::a001_material_type::api as material_type_api;
use crate::domain::a004_design::api;
use contracts::domain::a001_material_type::aggregate::{MaterialType, MaterialTypeId};
use contracts::domain::a004_design::aggregate::{Complexity, DesignDto, DesignId};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel of the design editor
#[derive(Clone)]
pub struct DesignDetailsViewModel {
    pub form: RwSignal<DesignDto>,
    pub material_types: RwSignal<Vec<MaterialType>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl DesignDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(DesignDto::new_blank()),
            material_types: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.with(|f| f.is_edit_mode())
    }

    /// Material types feed the requirement rows and validation
    pub fn load_material_types(&self) {
        let material_types = self.material_types;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match material_type_api::fetch_all().await {
                Ok(types) => material_types.set(types),
                Err(e) => error.set(Some(format!("Error al cargar tipos de insumo: {}", e))),
            }
        });
    }

    /// Load the design being edited, if any
    pub fn load_if_needed(&self, id: Option<DesignId>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(existing_id).await {
                Ok(design) => form.set(DesignDto::from(&design)),
                Err(e) => error.set(Some(format!("Error al cargar el diseño: {}", e))),
            }
        });
    }

    pub fn set_complexity(&self, code: &str) {
        if let Some(complexity) = Complexity::from_code(code) {
            self.form.update(|f| f.complexity = complexity);
        }
    }

    pub fn add_requirement(&self) {
        self.form.update(|f| f.add_requirement());
    }

    pub fn remove_requirement(&self, index: usize) {
        self.form.update(|f| f.remove_requirement(index));
    }

    pub fn set_requirement_type(&self, index: usize, material_type_id: Option<MaterialTypeId>) {
        self.form.update(|f| {
            if let Some(row) = f.requirements.get_mut(index) {
                row.material_type_id = material_type_id;
            }
        });
    }

    pub fn set_requirement_quantity(&self, index: usize, raw: &str) {
        let quantity = raw.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0);
        self.form.update(|f| {
            if let Some(row) = f.requirements.get_mut(index) {
                row.quantity_per_meter = quantity;
            }
        });
    }

    pub fn set_requirement_description(&self, index: usize, value: String) {
        self.form.update(|f| {
            if let Some(row) = f.requirements.get_mut(index) {
                row.description = if value.trim().is_empty() { None } else { Some(value) };
            }
        });
    }

    /// Validate against the loaded material types, then create or update
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let mut current = self.form.get_untracked();
        current.code = current.code.trim().to_string();
        current.name = current.name.trim().to_string();

        let validation = self
            .material_types
            .with_untracked(|types| current.validate(types));
        if let Err(msg) = validation {
            self.error.set(Some(msg));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        error.set(None);
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::save(&current).await;
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("design {} saved", saved.id);
                    (on_saved)(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
