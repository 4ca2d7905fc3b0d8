use axum::{extract::FromRequestParts, http::request::Parts};

use super::query_params::{QueryParams, QueryParamsError};
use super::server::api_entities::api_error::ApiError;

/// Extracts the list query of a request.
///
/// Usage:
/// ```ignore
/// async fn handler(
///     QueryParamsExtractor(query_params): QueryParamsExtractor,
/// ) -> Result<Response<..>, ApiError> {
///     // query_params.filter, query_params.param("search")
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryParams);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::bad_request(format!("Invalid query string: {e}")))?;

        let query_params = QueryParams::from_pairs(pairs)?;

        Ok(QueryParamsExtractor(query_params))
    }
}

impl From<QueryParamsError> for ApiError {
    fn from(error: QueryParamsError) -> Self {
        ApiError::bad_request(error.to_string())
    }
}
