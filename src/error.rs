use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Failure taxonomy for the whole API. Business-rule violations are
/// detected explicitly by the services; everything else that reaches
/// the client is a generic internal error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid request")]
    InvalidInput(Vec<String>),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Uniform error envelope: `{"error": {"message", "code", "details?"}}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "Employee not found")]
    pub message: String,

    #[schema(example = 404)]
    pub code: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ApiError {
    fn details(&self) -> Option<Vec<String>> {
        match self {
            ApiError::InvalidInput(details) => Some(details.clone()),
            _ => None,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = self.status_code();
        match self {
            // Never leak the underlying cause to the caller.
            ApiError::Internal(cause) => error!(cause = %cause, "request failed"),
            other => info!(code = code.as_u16(), reason = %other, "request rejected"),
        }
        HttpResponse::build(code).json(ErrorBody {
            error: ErrorDetail {
                message: self.to_string(),
                code: code.as_u16(),
                details: self.details(),
            },
        })
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        // A lost pre-check race on a unique index still surfaces as a
        // conflict, not an internal fault.
        if let sqlx::Error::Database(ref db) = e {
            if db.is_unique_violation() {
                return ApiError::Conflict("Duplicate value violates a uniqueness constraint".into());
            }
        }
        ApiError::Internal(e.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        let mut details = Vec::new();
        for (field, errs) in e.field_errors() {
            for err in errs {
                match &err.message {
                    Some(m) => details.push(format!("{field}: {m}")),
                    None => details.push(format!("{field}: {}", err.code)),
                }
            }
        }
        ApiError::InvalidInput(details)
    }
}

/// Route body deserialization failures into the 400 envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::InvalidInput(vec![err.to_string()]).into())
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::InvalidInput(vec![err.to_string()]).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::InvalidInput(vec![err.to_string()]).into())
}
