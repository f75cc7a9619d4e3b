use crate::shared::http;
use contracts::domain::a001_material_type::aggregate::{MaterialType, MaterialTypeDto, MaterialTypeId};
use contracts::domain::common::AggregateRoot;

pub async fn fetch_all() -> Result<Vec<MaterialType>, String> {
    http::get_json(&MaterialType::collection_path())
        .await
        .map_err(|e| e.to_string())
}

pub async fn create(dto: &MaterialTypeDto) -> Result<MaterialType, String> {
    http::post_json(&MaterialType::collection_path(), dto)
        .await
        .map_err(|e| e.to_string())
}

pub async fn delete(id: MaterialTypeId) -> Result<(), String> {
    http::delete(&MaterialType::element_path(&id))
        .await
        .map_err(|e| e.to_string())
}
