//! Per-session selection state of the quote form.
//!
//! Pure data and transitions only; fetching lives in [`super::engine`] and
//! in the front-end view model, which both drive these methods.

use crate::domain::a001_material_type::aggregate::MaterialTypeId;
use crate::domain::a002_material_reference::aggregate::{MaterialReference, MaterialReferenceId};
use crate::domain::a003_color::aggregate::{Color, ColorId};
use crate::domain::a004_design::aggregate::{Design, DesignMaterialRequirement};
use crate::shared::api_error::ApiError;
use std::collections::HashMap;
use thiserror::Error;

/// Selection for one bill-of-materials line of the chosen design.
///
/// `color_id` only means something while `reference_id` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSlot {
    pub material_type_id: MaterialTypeId,
    pub quantity_per_meter: f64,
    pub reference_id: Option<MaterialReferenceId>,
    pub color_id: Option<ColorId>,
}

impl SelectionSlot {
    pub fn empty(requirement: &DesignMaterialRequirement) -> Self {
        Self {
            material_type_id: requirement.material_type_id,
            quantity_per_meter: requirement.quantity_per_meter,
            reference_id: None,
            color_id: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.reference_id.is_some() && self.color_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No hay un diseño seleccionado")]
    NoDesign,
    #[error("El material #{index} no existe (el diseño tiene {len})")]
    SlotOutOfRange { index: usize, len: usize },
}

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

/// Chosen design, its slots, and the session caches of catalog lists.
///
/// Caches survive design changes: a type's references or a reference's
/// colors are fetched at most once per session unless invalidated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    design: Option<Design>,
    slots: Vec<SelectionSlot>,
    references: HashMap<MaterialTypeId, Vec<MaterialReference>>,
    colors: HashMap<MaterialReferenceId, Vec<Color>>,
    /// Last catalog failure, shown next to the form
    pub error: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn design(&self) -> Option<&Design> {
        self.design.as_ref()
    }

    pub fn slots(&self) -> &[SelectionSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&SelectionSlot> {
        self.slots.get(index)
    }

    /// Replace the whole selection with one empty slot per requirement,
    /// in the design's declared order.
    pub fn apply_design(&mut self, design: Design) {
        self.slots = design.requirements.iter().map(SelectionSlot::empty).collect();
        log::debug!(
            "design {} selected with {} material slots",
            design.code,
            self.slots.len()
        );
        self.design = Some(design);
        self.error = None;
    }

    /// Back to "no design chosen"
    pub fn clear_design(&mut self) {
        self.design = None;
        self.slots.clear();
    }

    /// Empty every slot of the current design, keeping the design itself
    pub fn reset_slots(&mut self) {
        for slot in &mut self.slots {
            slot.reference_id = None;
            slot.color_id = None;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.design.is_some() && self.slots.iter().all(SelectionSlot::is_complete)
    }

    // ------------------------------------------------------------------
    // Session caches
    // ------------------------------------------------------------------

    pub fn references_for(&self, material_type_id: MaterialTypeId) -> Option<&[MaterialReference]> {
        self.references.get(&material_type_id).map(Vec::as_slice)
    }

    pub fn has_references(&self, material_type_id: MaterialTypeId) -> bool {
        self.references.contains_key(&material_type_id)
    }

    pub fn store_references(&mut self, material_type_id: MaterialTypeId, items: Vec<MaterialReference>) {
        self.references.insert(material_type_id, items);
    }

    pub fn invalidate_references(&mut self, material_type_id: MaterialTypeId) {
        self.references.remove(&material_type_id);
    }

    pub fn colors_for(&self, reference_id: MaterialReferenceId) -> Option<&[Color]> {
        self.colors.get(&reference_id).map(Vec::as_slice)
    }

    pub fn has_colors(&self, reference_id: MaterialReferenceId) -> bool {
        self.colors.contains_key(&reference_id)
    }

    pub fn store_colors(&mut self, reference_id: MaterialReferenceId, items: Vec<Color>) {
        self.colors.insert(reference_id, items);
    }

    pub fn invalidate_colors(&mut self, reference_id: MaterialReferenceId) {
        self.colors.remove(&reference_id);
    }

    /// Distinct slot material types whose references are not cached yet
    pub fn missing_reference_types(&self) -> Vec<MaterialTypeId> {
        let mut missing: Vec<MaterialTypeId> = Vec::new();
        for slot in &self.slots {
            if !self.has_references(slot.material_type_id) && !missing.contains(&slot.material_type_id) {
                missing.push(slot.material_type_id);
            }
        }
        missing
    }

    // ------------------------------------------------------------------
    // Slot edits
    // ------------------------------------------------------------------

    fn slot_mut(&mut self, index: usize) -> Result<&mut SelectionSlot, SelectionError> {
        if self.design.is_none() {
            return Err(SelectionError::NoDesign);
        }
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(SelectionError::SlotOutOfRange { index, len })
    }

    /// Set (or clear) a slot's reference. The slot color is always cleared.
    ///
    /// Returns the reference whose colors still need loading, if any.
    pub fn set_slot_reference(
        &mut self,
        index: usize,
        reference_id: Option<MaterialReferenceId>,
    ) -> Result<Option<MaterialReferenceId>, SelectionError> {
        self.error = None;
        let slot = self.slot_mut(index)?;
        slot.reference_id = reference_id;
        slot.color_id = None;
        Ok(reference_id.filter(|r| !self.has_colors(*r)))
    }

    /// Set (or clear) a slot's color. Ownership of the color by the slot's
    /// reference is not checked here; the API re-validates it.
    pub fn set_slot_color(&mut self, index: usize, color_id: Option<ColorId>) -> Result<(), SelectionError> {
        self.error = None;
        let slot = self.slot_mut(index)?;
        slot.color_id = color_id;
        Ok(())
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("quote selection error: {}", message);
        self.error = Some(message);
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::a004_design::aggregate::DesignId;

    pub fn design(id: i64, type_ids: &[i64]) -> Design {
        Design {
            id: DesignId(id),
            code: format!("CORTINA-{:03}", id),
            name: format!("Diseño {}", id),
            description: None,
            labor_cost: 30000.0,
            complexity: None,
            requirements: type_ids
                .iter()
                .enumerate()
                .map(|(i, t)| DesignMaterialRequirement {
                    material_type_id: MaterialTypeId(*t),
                    quantity_per_meter: (i + 1) as f64,
                    description: None,
                })
                .collect(),
            created_at: None,
        }
    }

    pub fn reference(id: i64, type_id: i64) -> MaterialReference {
        MaterialReference {
            id: MaterialReferenceId(id),
            material_type_id: MaterialTypeId(type_id),
            code: format!("REF-{:03}", id),
            name: format!("Referencia {}", id),
            unit_price: 1000.0 * id as f64,
            created_at: None,
        }
    }

    pub fn color(id: i64, reference_id: i64) -> Color {
        Color {
            id: ColorId(id),
            reference_id: MaterialReferenceId(reference_id),
            code: format!("COL-{:03}", id),
            name: format!("Color {}", id),
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_design_yields_one_empty_slot_per_requirement_in_order() {
        for type_ids in [vec![4], vec![2, 1, 3], vec![5, 5, 1, 9]] {
            let mut state = SelectionState::new();
            state.apply_design(design(1, &type_ids));
            let slots = state.slots();
            assert_eq!(slots.len(), type_ids.len());
            for (slot, type_id) in slots.iter().zip(&type_ids) {
                assert_eq!(slot.material_type_id, MaterialTypeId(*type_id));
                assert_eq!(slot.reference_id, None);
                assert_eq!(slot.color_id, None);
            }
        }
    }

    #[test]
    fn test_new_design_replaces_selection_wholesale() {
        let mut state = SelectionState::new();
        state.apply_design(design(1, &[1, 2]));
        state.set_slot_reference(0, Some(MaterialReferenceId(5))).unwrap();
        state.set_slot_color(0, Some(ColorId(9))).unwrap();

        state.apply_design(design(2, &[1]));
        assert_eq!(state.slots().len(), 1);
        assert_eq!(state.slots()[0].reference_id, None);
        assert_eq!(state.design().map(|d| d.id.0), Some(2));
    }

    #[test]
    fn test_changing_reference_always_clears_color() {
        let mut state = SelectionState::new();
        state.apply_design(design(1, &[1]));

        state.set_slot_reference(0, Some(MaterialReferenceId(5))).unwrap();
        assert_eq!(state.slot(0).unwrap().color_id, None);

        state.set_slot_color(0, Some(ColorId(9))).unwrap();
        state.set_slot_reference(0, Some(MaterialReferenceId(6))).unwrap();
        assert_eq!(state.slot(0).unwrap().color_id, None);

        state.set_slot_color(0, Some(ColorId(9))).unwrap();
        state.set_slot_reference(0, Some(MaterialReferenceId(6))).unwrap();
        assert_eq!(state.slot(0).unwrap().color_id, None);

        state.set_slot_color(0, Some(ColorId(9))).unwrap();
        state.set_slot_reference(0, None).unwrap();
        assert_eq!(state.slot(0).unwrap().reference_id, None);
        assert_eq!(state.slot(0).unwrap().color_id, None);
    }

    #[test]
    fn test_reference_reports_color_load_only_when_uncached() {
        let mut state = SelectionState::new();
        state.apply_design(design(1, &[1, 1]));

        let pending = state.set_slot_reference(0, Some(MaterialReferenceId(5))).unwrap();
        assert_eq!(pending, Some(MaterialReferenceId(5)));

        state.store_colors(MaterialReferenceId(5), vec![color(9, 5)]);
        let pending = state.set_slot_reference(1, Some(MaterialReferenceId(5))).unwrap();
        assert_eq!(pending, None);
    }

    #[test]
    fn test_slot_edits_need_design_and_valid_index() {
        let mut state = SelectionState::new();
        assert_eq!(
            state.set_slot_color(0, Some(ColorId(1))),
            Err(SelectionError::NoDesign)
        );
        state.apply_design(design(1, &[1]));
        assert_eq!(
            state.set_slot_reference(3, None),
            Err(SelectionError::SlotOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_caches_survive_design_change_until_invalidated() {
        let mut state = SelectionState::new();
        state.apply_design(design(1, &[1, 2, 1]));
        assert_eq!(
            state.missing_reference_types(),
            vec![MaterialTypeId(1), MaterialTypeId(2)]
        );

        state.store_references(MaterialTypeId(1), vec![reference(5, 1)]);
        state.apply_design(design(2, &[1]));
        assert!(state.missing_reference_types().is_empty());

        state.invalidate_references(MaterialTypeId(1));
        assert_eq!(state.missing_reference_types(), vec![MaterialTypeId(1)]);
    }

    #[test]
    fn test_reset_slots_keeps_design() {
        let mut state = SelectionState::new();
        state.apply_design(design(1, &[1]));
        state.set_slot_reference(0, Some(MaterialReferenceId(5))).unwrap();
        state.set_slot_color(0, Some(ColorId(9))).unwrap();
        assert!(state.is_complete());

        state.reset_slots();
        assert!(!state.is_complete());
        assert!(state.design().is_some());
    }

    #[test]
    fn test_slot_edits_clear_previous_error() {
        let mut state = SelectionState::new();
        state.apply_design(design(3, &[1, 2]));

        state.record_error("Error al cargar colores: Error de red: reset");
        state.set_slot_reference(0, Some(MaterialReferenceId(5))).unwrap();
        assert_eq!(state.error, None);

        state.record_error("Error al cargar colores: Error de red: reset");
        state.set_slot_color(0, Some(ColorId(9))).unwrap();
        assert_eq!(state.error, None);
    }
}
