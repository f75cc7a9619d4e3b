/// Root of an aggregate served by the pricing API.
///
/// Besides the record id, every aggregate carries static metadata: the REST
/// collection it lives under and the labels the UI shows for it.
pub trait AggregateRoot {
    /// Aggregate id type
    type Id: super::AggregateId;

    /// Record id
    fn id(&self) -> Self::Id;

    /// Short display text for pickers and tables
    fn description(&self) -> &str;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// REST collection segment under `/api/v1/` (e.g. "tipos-insumo")
    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;

    /// Collection path with trailing slash, as the API expects for list/create
    fn collection_path() -> String {
        format!("/api/v1/{}/", Self::collection_name())
    }

    /// Path of a single record
    fn element_path(id: &Self::Id) -> String {
        use super::AggregateId;
        format!("/api/v1/{}/{}", Self::collection_name(), id.as_string())
    }
}
