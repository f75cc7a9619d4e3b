//! Seams between the quote workflow and the pricing API.
//!
//! The browser implements these over HTTP; tests use in-memory fakes.
//! Futures are not `Send` because the WASM runtime is single-threaded.

use super::request::QuoteRequest;
use crate::domain::a001_material_type::aggregate::MaterialTypeId;
use crate::domain::a002_material_reference::aggregate::{MaterialReference, MaterialReferenceId};
use crate::domain::a003_color::aggregate::Color;
use crate::domain::a004_design::aggregate::{Design, DesignId};
use crate::domain::a005_order::aggregate::Order;
use crate::shared::api_error::ApiError;
use async_trait::async_trait;
use std::rc::Rc;

/// Read-only catalog lookups the selection engine depends on
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Design detail including its bill of materials; `NotFound` if unknown
    async fn fetch_design(&self, id: DesignId) -> Result<Design, ApiError>;

    async fn fetch_references_by_type(
        &self,
        material_type_id: MaterialTypeId,
    ) -> Result<Vec<MaterialReference>, ApiError>;

    async fn fetch_colors_by_reference(
        &self,
        reference_id: MaterialReferenceId,
    ) -> Result<Vec<Color>, ApiError>;
}

/// Order creation endpoint
#[async_trait(?Send)]
pub trait QuoteGateway {
    /// Persist the quote; the returned order carries the server-computed cost
    async fn create_order(&self, request: &QuoteRequest) -> Result<Order, ApiError>;
}

#[async_trait(?Send)]
impl<T: CatalogSource + ?Sized> CatalogSource for Rc<T> {
    async fn fetch_design(&self, id: DesignId) -> Result<Design, ApiError> {
        (**self).fetch_design(id).await
    }

    async fn fetch_references_by_type(
        &self,
        material_type_id: MaterialTypeId,
    ) -> Result<Vec<MaterialReference>, ApiError> {
        (**self).fetch_references_by_type(material_type_id).await
    }

    async fn fetch_colors_by_reference(
        &self,
        reference_id: MaterialReferenceId,
    ) -> Result<Vec<Color>, ApiError> {
        (**self).fetch_colors_by_reference(reference_id).await
    }
}

#[async_trait(?Send)]
impl<T: QuoteGateway + ?Sized> QuoteGateway for Rc<T> {
    async fn create_order(&self, request: &QuoteRequest) -> Result<Order, ApiError> {
        (**self).create_order(request).await
    }
}
