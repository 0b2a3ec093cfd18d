//! Service layer for the rental backend.
//! - Plain domain structs decoupled from the SeaORM entities in `models`.
//! - Repository traits with a SeaORM implementation and an in-memory one.
//! - Application services owning validation, related-car checks and the
//!   derived `average_rating` field.

pub mod errors;
pub mod domain;
pub mod rating;
pub mod repository;
pub mod repo;
pub mod services;

#[cfg(test)]
pub mod test_support;

pub use repository::Repositories;
