//! SeaORM entities for the rental schema plus the field-level validation
//! shared by every write path.

pub mod errors;
pub mod db;
pub mod validation;
pub mod car;
pub mod booking;
pub mod review;
pub mod wishlist;

#[cfg(test)]
mod tests;
