use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use rostra_core::domain::common::entities::app_errors::CoreError;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { message: String, errors: Vec<Value> },

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{message}")]
    NotFound { message: String, errors: Vec<Value> },

    #[error("{0}")]
    Conflict(String),

    #[error("Validation Error")]
    UnprocessableEntity(Vec<Value>),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn errors(&self) -> Vec<Value> {
        match self {
            ApiError::BadRequest { errors, .. }
            | ApiError::NotFound { errors, .. }
            | ApiError::UnprocessableEntity(errors) => errors.clone(),
            other => vec![json!({ "message": other.to_string() })],
        }
    }
}

/// Body of every failed response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    #[schema(value_type = Option<Object>)]
    pub content: Option<Value>,
    pub message: String,
    #[schema(value_type = Vec<Object>)]
    pub errors: Vec<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", self);
        } else {
            warn!(status = status.as_u16(), "{}", self);
        }

        let body = ApiErrorResponse {
            content: None,
            message: self.to_string(),
            errors: self.errors(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::not_found("Resource not found"),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::InvalidCredentials => ApiError::bad_request("Invalid credentials"),
            CoreError::InvalidToken => ApiError::Unauthorized("Invalid token".to_string()),
            CoreError::TokenExpired => ApiError::Unauthorized("Token expired".to_string()),
            CoreError::AlreadyExists(message) => ApiError::Conflict(message),
            e @ (CoreError::InvalidField(_) | CoreError::InvalidFilter(_)) => {
                ApiError::bad_request(e.to_string())
            }
            CoreError::Validation(message) => ApiError::bad_request(message),
            CoreError::ServiceUnavailable => {
                ApiError::ServiceUnavailable("Service unavailable".to_string())
            }
            CoreError::HashError | CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal Server Error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<Value> = Vec::new();
        flatten_validation_errors("", &errors, &mut fields);
        ApiError::UnprocessableEntity(fields)
    }
}

fn flatten_validation_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<Value>) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (field, kind) in entries {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            validator::ValidationErrorsKind::Field(field_errors) => {
                for e in field_errors {
                    out.push(json!({
                        "field": path,
                        "message": e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{path} is invalid")),
                        "code": e.code,
                    }));
                }
            }
            validator::ValidationErrorsKind::Struct(nested) => {
                flatten_validation_errors(&path, nested, out)
            }
            validator::ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_validation_errors(&format!("{path}.{index}"), nested, out);
                }
            }
        }
    }
}

/// JSON body extractor that also runs the payload's `validator` rules.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: "Invalid JSON".to_string(),
                errors: vec![json!({ "message": rejection.body_text() })],
            })?;

        value.validate()?;

        Ok(ValidateJson(value))
    }
}
