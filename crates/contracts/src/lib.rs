//! Shared contracts between the curtain quoting front end and the pricing API.
//!
//! Everything here is plain data plus pure rules, so it compiles and tests
//! natively as well as inside the WASM bundle.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
