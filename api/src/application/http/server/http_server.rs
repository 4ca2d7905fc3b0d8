use std::sync::{Arc, OnceLock};

use axum::{
    Json, Router,
    extract::Request,
    http::{
        HeaderValue, Method, StatusCode,
        header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION},
    },
    response::IntoResponse,
    routing::get,
};
use axum_prometheus::{PrometheusMetricLayer, metrics_exporter_prometheus::PrometheusHandle};
use rostra_core::{
    application::create_service, domain::common::RostraConfig,
    infrastructure::db::postgres::Postgres,
};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::{
    api_entities::api_error::ApiErrorResponse, app_state::AppState, openapi::ApiDoc,
};
use crate::application::http::{
    authentication::router::authentication_routes, department::router::department_routes,
    employee::router::employee_routes, health::router::health_routes,
};
use crate::args::{Args, Environment};

/// Connects to the database and builds the application state. The returned
/// [`Postgres`] handle is closed by the caller once the server has stopped.
pub async fn state(args: Arc<Args>) -> Result<(Postgres, AppState), anyhow::Error> {
    let config = RostraConfig::from(args.as_ref().clone());
    let (postgres, service) = create_service(&config).await?;

    Ok((postgres, AppState::new(args, service)))
}

fn cors(args: &Args) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT, LOCATION]);

    if args.env == Environment::Development {
        return cors.allow_origin(Any);
    }

    let allowed_origins = args
        .server
        .allowed_origins
        .iter()
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid allowed origin {:?}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    cors.allow_origin(AllowOrigin::list(allowed_origins))
        .allow_credentials(true)
}

/// The recorder is process global, so the layer is built once and shared by
/// every router.
fn metrics() -> (PrometheusMetricLayer<'static>, PrometheusHandle) {
    static METRICS: OnceLock<(PrometheusMetricLayer<'static>, PrometheusHandle)> = OnceLock::new();
    METRICS.get_or_init(PrometheusMetricLayer::pair).clone()
}

async fn route_not_found(request: Request) -> impl IntoResponse {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse {
            content: None,
            message: format!("Route {method} {path} not found"),
            errors: vec![json!({ "type": "NotFound", "path": path, "method": method })],
        }),
    )
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let (prometheus_layer, metric_handle) = metrics();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    openapi.paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();

    let router = axum::Router::new()
        .merge(
            SwaggerUi::new(format!("{root_path}/swagger-ui"))
                .url(format!("{root_path}/api-docs/openapi.json"), openapi),
        )
        .merge(authentication_routes(&root_path))
        .merge(employee_routes(state.clone()))
        .merge(department_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .fallback(route_not_found)
        .layer(trace_layer)
        .layer(cors(&state.args))
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}

/// Resolves on SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}
