//! Async driver of [`SelectionState`] over a [`CatalogSource`].

use super::gateway::CatalogSource;
use super::selection::{SelectionError, SelectionState};
use crate::domain::a001_material_type::aggregate::MaterialTypeId;
use crate::domain::a002_material_reference::aggregate::{MaterialReference, MaterialReferenceId};
use crate::domain::a003_color::aggregate::{Color, ColorId};
use crate::domain::a004_design::aggregate::DesignId;
use crate::shared::api_error::ApiError;

/// Dependent selection engine: design → slots → references → colors.
///
/// No sequencing guard exists between overlapping calls; the caller owns
/// the engine mutably for the duration of each operation.
pub struct SelectionEngine<S> {
    source: S,
    state: SelectionState,
}

impl<S: CatalogSource> SelectionEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: SelectionState::new(),
        }
    }

    /// Resume from a state kept elsewhere, e.g. in a UI signal
    pub fn with_state(source: S, state: SelectionState) -> Self {
        Self { source, state }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SelectionState {
        &mut self.state
    }

    pub fn into_state(self) -> SelectionState {
        self.state
    }

    /// Fetch the design and start a fresh selection from it.
    ///
    /// On failure the previous selection is left untouched.
    pub async fn select_design(&mut self, design_id: DesignId) -> Result<(), ApiError> {
        let design = self.source.fetch_design(design_id).await?;
        self.state.apply_design(design);
        Ok(())
    }

    /// References of a material type, fetched once per session
    pub async fn load_references_for(
        &mut self,
        material_type_id: MaterialTypeId,
    ) -> Result<&[MaterialReference], ApiError> {
        if !self.state.has_references(material_type_id) {
            let items = self.source.fetch_references_by_type(material_type_id).await?;
            log::debug!(
                "cached {} references for material type {}",
                items.len(),
                material_type_id
            );
            self.state.store_references(material_type_id, items);
        }
        Ok(self.state.references_for(material_type_id).unwrap_or(&[]))
    }

    /// Colors of a reference, fetched once per session
    pub async fn load_colors_for(
        &mut self,
        reference_id: MaterialReferenceId,
    ) -> Result<&[Color], ApiError> {
        if !self.state.has_colors(reference_id) {
            let items = self.source.fetch_colors_by_reference(reference_id).await?;
            log::debug!("cached {} colors for reference {}", items.len(), reference_id);
            self.state.store_colors(reference_id, items);
        }
        Ok(self.state.colors_for(reference_id).unwrap_or(&[]))
    }

    /// Fetch references for every slot type not cached yet.
    ///
    /// Failures are recorded in `state().error`; the other types still load.
    pub async fn preload_references(&mut self) {
        self.state.clear_error();
        for material_type_id in self.state.missing_reference_types() {
            let loaded = self.load_references_for(material_type_id).await.map(|_| ());
            if let Err(err) = loaded {
                self.state
                    .record_error(format!("Error al cargar referencias: {}", err));
            }
        }
    }

    /// Apply a reference to a slot and make sure its colors are loaded.
    ///
    /// The reference is applied even if the color fetch fails; that failure
    /// lands in `state().error` instead of being returned.
    pub async fn set_slot_reference(
        &mut self,
        slot_index: usize,
        reference_id: Option<MaterialReferenceId>,
    ) -> Result<(), SelectionError> {
        let pending = self.state.set_slot_reference(slot_index, reference_id)?;
        if let Some(reference_id) = pending {
            let loaded = self.load_colors_for(reference_id).await.map(|_| ());
            if let Err(err) = loaded {
                self.state
                    .record_error(format!("Error al cargar colores: {}", err));
            }
        }
        Ok(())
    }

    pub fn set_slot_color(
        &mut self,
        slot_index: usize,
        color_id: Option<ColorId>,
    ) -> Result<(), SelectionError> {
        self.state.set_slot_color(slot_index, color_id)
    }

    pub fn invalidate_references(&mut self, material_type_id: MaterialTypeId) {
        self.state.invalidate_references(material_type_id);
    }

    pub fn invalidate_colors(&mut self, reference_id: MaterialReferenceId) {
        self.state.invalidate_colors(reference_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_design::aggregate::Design;
    use crate::usecases::u501_curtain_quote::selection::fixtures::{color, design, reference};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeCatalog {
        designs: HashMap<DesignId, Design>,
        references: HashMap<MaterialTypeId, Vec<MaterialReference>>,
        colors: HashMap<MaterialReferenceId, Vec<Color>>,
        failing_colors: bool,
        calls: RefCell<Vec<String>>,
    }

    impl FakeCatalog {
        fn with_design(mut self, d: Design) -> Self {
            self.designs.insert(d.id, d);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl CatalogSource for FakeCatalog {
        async fn fetch_design(&self, id: DesignId) -> Result<Design, ApiError> {
            self.calls.borrow_mut().push(format!("design:{}", id));
            self.designs
                .get(&id)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(format!("Diseño {} no encontrado", id)))
        }

        async fn fetch_references_by_type(
            &self,
            material_type_id: MaterialTypeId,
        ) -> Result<Vec<MaterialReference>, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("references:{}", material_type_id));
            Ok(self
                .references
                .get(&material_type_id)
                .cloned()
                .unwrap_or_default())
        }

        async fn fetch_colors_by_reference(
            &self,
            reference_id: MaterialReferenceId,
        ) -> Result<Vec<Color>, ApiError> {
            self.calls.borrow_mut().push(format!("colors:{}", reference_id));
            if self.failing_colors {
                return Err(ApiError::Network("connection reset".into()));
            }
            Ok(self.colors.get(&reference_id).cloned().unwrap_or_default())
        }
    }

    fn catalog() -> FakeCatalog {
        let mut catalog = FakeCatalog::default().with_design(design(3, &[1, 2]));
        catalog
            .references
            .insert(MaterialTypeId(1), vec![reference(5, 1), reference(6, 1)]);
        catalog
            .colors
            .insert(MaterialReferenceId(5), vec![color(9, 5), color(10, 5)]);
        catalog
    }

    #[tokio::test]
    async fn test_select_unknown_design_is_not_found_and_keeps_state() {
        let mut engine = SelectionEngine::new(catalog());
        engine.select_design(DesignId(3)).await.unwrap();

        let err = engine.select_design(DesignId(42)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(engine.state().design().map(|d| d.id), Some(DesignId(3)));
        assert_eq!(engine.state().slots().len(), 2);
    }

    #[tokio::test]
    async fn test_references_fetched_once_per_type() {
        let mut engine = SelectionEngine::new(catalog());
        let first = engine.load_references_for(MaterialTypeId(1)).await.unwrap().len();
        let second = engine.load_references_for(MaterialTypeId(1)).await.unwrap().len();
        assert_eq!((first, second), (2, 2));
        engine.load_references_for(MaterialTypeId(2)).await.unwrap();

        engine.invalidate_references(MaterialTypeId(1));
        engine.load_references_for(MaterialTypeId(1)).await.unwrap();

        let source_calls = engine.source.calls();
        assert_eq!(
            source_calls,
            vec!["references:1", "references:2", "references:1"]
        );
    }

    #[tokio::test]
    async fn test_preload_fetches_each_missing_type_once() {
        let mut engine = SelectionEngine::new(catalog().with_design(design(4, &[1, 1, 2])));
        engine.load_references_for(MaterialTypeId(2)).await.unwrap();
        engine.select_design(DesignId(4)).await.unwrap();
        engine.preload_references().await;

        assert_eq!(
            engine.source.calls(),
            vec!["references:2", "design:4", "references:1"]
        );
        assert!(engine.state().missing_reference_types().is_empty());
        assert_eq!(engine.state().error, None);
    }

    #[tokio::test]
    async fn test_with_state_resumes_cached_lists() {
        let mut first = SelectionEngine::new(catalog());
        first.select_design(DesignId(3)).await.unwrap();
        first.preload_references().await;
        let state = first.into_state();

        let mut resumed = SelectionEngine::with_state(catalog(), state);
        resumed.preload_references().await;
        assert!(resumed.source.calls().is_empty());
        assert_eq!(resumed.state().slots().len(), 2);
    }

    #[tokio::test]
    async fn test_set_reference_loads_colors_once_and_clears_color() {
        let mut engine = SelectionEngine::new(catalog());
        engine.select_design(DesignId(3)).await.unwrap();

        engine.set_slot_reference(0, Some(MaterialReferenceId(5))).await.unwrap();
        engine.set_slot_color(0, Some(ColorId(9))).unwrap();
        engine.set_slot_reference(0, Some(MaterialReferenceId(5))).await.unwrap();

        let slot = engine.state().slot(0).unwrap();
        assert_eq!(slot.reference_id, Some(MaterialReferenceId(5)));
        assert_eq!(slot.color_id, None);
        assert_eq!(
            engine.state().colors_for(MaterialReferenceId(5)).map(|c| c.len()),
            Some(2)
        );
        assert_eq!(engine.source.calls(), vec!["design:3", "colors:5"]);
    }

    #[tokio::test]
    async fn test_color_failure_is_recorded_and_reference_still_applied() {
        let mut source = catalog();
        source.failing_colors = true;
        let mut engine = SelectionEngine::new(source);
        engine.select_design(DesignId(3)).await.unwrap();

        let result = engine.set_slot_reference(1, Some(MaterialReferenceId(6))).await;
        assert!(result.is_ok());

        let state = engine.into_state();
        assert_eq!(state.slot(1).unwrap().reference_id, Some(MaterialReferenceId(6)));
        assert_eq!(
            state.error.as_deref(),
            Some("Error al cargar colores: Error de red: connection reset")
        );
        assert!(!state.has_colors(MaterialReferenceId(6)));
    }

    #[tokio::test]
    async fn test_successful_reference_replaces_color_error() {
        let mut source = catalog();
        source.failing_colors = true;
        let mut engine = SelectionEngine::new(source);
        engine.select_design(DesignId(3)).await.unwrap();
        engine.set_slot_reference(1, Some(MaterialReferenceId(6))).await.unwrap();
        assert!(engine.state().error.is_some());

        engine.source.failing_colors = false;
        engine.set_slot_reference(0, Some(MaterialReferenceId(5))).await.unwrap();
        engine.set_slot_color(0, Some(ColorId(9))).unwrap();
        assert_eq!(engine.state().error, None);
    }

    #[tokio::test]
    async fn test_color_is_not_checked_against_reference() {
        let mut engine = SelectionEngine::new(catalog());
        engine.select_design(DesignId(3)).await.unwrap();
        engine.set_slot_reference(0, Some(MaterialReferenceId(5))).await.unwrap();
        engine.set_slot_color(0, Some(ColorId(777))).unwrap();
        assert_eq!(engine.state().slot(0).unwrap().color_id, Some(ColorId(777)));
    }
}
