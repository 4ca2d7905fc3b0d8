use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body of every successful response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiResponse<T> {
    pub content: T,
    pub message: String,
    #[schema(value_type = Vec<Object>)]
    pub errors: Vec<Value>,
}

#[derive(Debug, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T, &'static str),
    Created(T, &'static str),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        let (status, content, message) = match self {
            Response::OK(content, message) => (StatusCode::OK, content, message),
            Response::Created(content, message) => (StatusCode::CREATED, content, message),
        };

        let body = ApiResponse {
            content,
            message: message.to_string(),
            errors: Vec::new(),
        };

        (status, Json(body)).into_response()
    }
}
