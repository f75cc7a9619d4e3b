//! Curtain quote: design → material slots → references → colors → order.

pub mod engine;
pub mod gateway;
pub mod request;
pub mod response;
pub mod selection;

pub use engine::SelectionEngine;
pub use gateway::{CatalogSource, QuoteGateway};
pub use request::{build_payload, submit_quote, validate, QuoteForm, QuoteRequest, ResetPolicy};
pub use response::QuoteSummary;
pub use selection::{SelectionError, SelectionSlot, SelectionState};
