use crate::shared::http;
use async_trait::async_trait;
use contracts::domain::a001_material_type::aggregate::MaterialTypeId;
use contracts::domain::a002_material_reference::aggregate::{
    by_type_path, MaterialReference, MaterialReferenceId,
};
use contracts::domain::a003_color::aggregate::{by_reference_path, Color};
use contracts::domain::a004_design::aggregate::{Design, DesignId};
use contracts::domain::a005_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::usecases::u501_curtain_quote::{CatalogSource, QuoteGateway, QuoteRequest};

/// Catalog lookups and order creation over the pricing API
#[derive(Clone, Copy, Default)]
pub struct HttpCatalog;

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn fetch_design(&self, id: DesignId) -> Result<Design, ApiError> {
        http::get_json(&Design::element_path(&id)).await
    }

    async fn fetch_references_by_type(
        &self,
        material_type_id: MaterialTypeId,
    ) -> Result<Vec<MaterialReference>, ApiError> {
        http::get_json(&by_type_path(material_type_id)).await
    }

    async fn fetch_colors_by_reference(
        &self,
        reference_id: MaterialReferenceId,
    ) -> Result<Vec<Color>, ApiError> {
        http::get_json(&by_reference_path(reference_id)).await
    }
}

#[async_trait(?Send)]
impl QuoteGateway for HttpCatalog {
    async fn create_order(&self, request: &QuoteRequest) -> Result<Order, ApiError> {
        http::post_json(&Order::collection_path(), request).await
    }
}

/// Designs offered in the quote's design picker
pub async fn fetch_designs() -> Result<Vec<Design>, ApiError> {
    http::get_json(&Design::collection_path()).await
}
