use crate::shared::http;
use contracts::domain::a001_material_type::aggregate::MaterialTypeId;
use contracts::domain::a002_material_reference::aggregate::{
    by_type_path, MaterialReference, MaterialReferenceDto, MaterialReferenceId,
};
use contracts::domain::common::AggregateRoot;

pub async fn fetch_all() -> Result<Vec<MaterialReference>, String> {
    http::get_json(&MaterialReference::collection_path())
        .await
        .map_err(|e| e.to_string())
}

pub async fn fetch_by_type(material_type_id: MaterialTypeId) -> Result<Vec<MaterialReference>, String> {
    http::get_json(&by_type_path(material_type_id))
        .await
        .map_err(|e| e.to_string())
}

/// Create, or update when the form carries an id
pub async fn save(dto: &MaterialReferenceDto) -> Result<MaterialReference, String> {
    let result = match dto.id {
        Some(id) => http::put_json(&MaterialReference::element_path(&id), dto).await,
        None => http::post_json(&MaterialReference::collection_path(), dto).await,
    };
    result.map_err(|e| e.to_string())
}

pub async fn delete(id: MaterialReferenceId) -> Result<(), String> {
    http::delete(&MaterialReference::element_path(&id))
        .await
        .map_err(|e| e.to_string())
}
