use crate::shared::http;
use contracts::domain::a004_design::aggregate::{Design, DesignDto, DesignId};
use contracts::domain::common::AggregateRoot;

pub async fn fetch_all() -> Result<Vec<Design>, String> {
    http::get_json(&Design::collection_path())
        .await
        .map_err(|e| e.to_string())
}

pub async fn fetch_by_id(id: DesignId) -> Result<Design, String> {
    http::get_json(&Design::element_path(&id))
        .await
        .map_err(|e| e.to_string())
}

/// Create, or update when the form carries an id
pub async fn save(dto: &DesignDto) -> Result<Design, String> {
    let result = match dto.id {
        Some(id) => http::put_json(&Design::element_path(&id), dto).await,
        None => http::post_json(&Design::collection_path(), dto).await,
    };
    result.map_err(|e| e.to_string())
}
