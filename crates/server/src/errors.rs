use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Structured HTTP error: a status plus an [`ErrorBody`].
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &str, detail: Option<String>) -> Self {
        Self { status, body: ErrorBody { error: title.to_string(), detail, field: None } }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.body.field = Some(field.into());
        self
    }

    pub fn validation(field: String, message: String) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(message)).with_field(field)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.into()))
    }

    fn internal(detail: String) -> Self {
        error!(error = %detail, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(detail))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation { field, message } => Self::validation(field, message),
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Integrity(msg) => Self::new(StatusCode::CONFLICT, "Integrity Error", Some(msg)),
            ServiceError::Db(msg) => Self::internal(msg),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection {
            JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(status, "Validation Error", Some(rejection.body_text()))
    }
}

/// Ids that do not parse as integers can never match a row.
impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::not_found(rejection.body_text())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(#[from] ModelError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::not_found("car", 1), StatusCode::NOT_FOUND),
            (ServiceError::Integrity("fk".into()), StatusCode::CONFLICT),
            (ServiceError::Db("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::from(ModelError::invalid("brand", "too long")), StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn validation_body_names_the_field() {
        let err = JsonApiError::from(ServiceError::from(ModelError::invalid("user_email", "enter a valid email address")));
        let body = serde_json::to_value(&err.body).unwrap();
        assert_eq!(body["error"], "Validation Error");
        assert_eq!(body["field"], "user_email");
        assert_eq!(body["detail"], "enter a valid email address");
    }

    #[test]
    fn not_found_body_omits_field() {
        let body = serde_json::to_value(&JsonApiError::not_found("car 3 not found").body).unwrap();
        assert!(body.get("field").is_none());
    }
}
