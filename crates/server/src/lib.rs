//! HTTP surface of the rental backend: axum router, handlers, error
//! mapping and OpenAPI document.

pub mod errors;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
