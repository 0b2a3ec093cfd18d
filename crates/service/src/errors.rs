use models::errors::ModelError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {field}: {message}")]
    Validation { field: String, message: String },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("integrity error: {0}")]
    Integrity(String),
    #[error("database error: {0}")]
    Db(String),
}

/// Field validation failures keep their field name; anything else from the
/// model layer is a store error.
impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation { field, message } => Self::Validation { field, message },
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self { Self::NotFound(format!("{} {} not found", entity, id)) }

    /// Classify a store error: constraint violations become `Integrity`,
    /// everything else stays an opaque `Db` error.
    pub fn db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) | Some(SqlErr::UniqueConstraintViolation(msg)) => {
                Self::Integrity(msg)
            }
            _ => Self::Db(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        assert_eq!(ServiceError::not_found("car", 7).to_string(), "not found: car 7 not found");
    }

    #[test]
    fn model_validation_keeps_field() {
        match ServiceError::from(ModelError::invalid("daily_rate", "too many digits")) {
            ServiceError::Validation { field, .. } => assert_eq!(field, "daily_rate"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_constraint_db_errors_stay_opaque() {
        let err = ServiceError::db(DbErr::Custom("boom".into()));
        assert!(matches!(err, ServiceError::Db(_)));
    }
}
