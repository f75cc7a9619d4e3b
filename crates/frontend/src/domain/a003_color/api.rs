use crate::shared::http;
use contracts::domain::a002_material_reference::aggregate::MaterialReferenceId;
use contracts::domain::a003_color::aggregate::{by_reference_path, Color, ColorDto, ColorId};
use contracts::domain::common::AggregateRoot;

pub async fn fetch_by_reference(reference_id: MaterialReferenceId) -> Result<Vec<Color>, String> {
    http::get_json(&by_reference_path(reference_id))
        .await
        .map_err(|e| e.to_string())
}

pub async fn create(dto: &ColorDto) -> Result<Color, String> {
    http::post_json(&Color::collection_path(), dto)
        .await
        .map_err(|e| e.to_string())
}

pub async fn delete(id: ColorId) -> Result<(), String> {
    http::delete(&Color::element_path(&id))
        .await
        .map_err(|e| e.to_string())
}
