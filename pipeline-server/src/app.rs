//! Routes and middleware.
//!
//! The service is stateless: each `POST /pipelines/parse` is validated on its
//! own and nothing is shared between requests.

use std::any::Any;
use std::error::Error as StdError;

use axum::{
    body::{to_bytes, Body},
    extract::rejection::JsonRejection,
    http::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use http_body_util::LengthLimitError;
use pipeline_validator::{Pipeline, PipelineReport};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;

use crate::error::ServerError;

pub const SERVICE_NAME: &str = "Pipeline Validator API";

/// Max request body size (bytes). Larger requests return 413.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Full application: routes plus middleware.
pub fn router() -> Router {
    with_layers(routes())
}

fn routes() -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health_check))
        .route("/pipelines/parse", post(parse_pipeline))
        .route("/test", post(test_endpoint))
}

/// Wraps routes with body logging, request spans, panic recovery and open CORS.
fn with_layers(routes: Router) -> Router {
    routes
        .layer(middleware::from_fn(log_request_body))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                info_span!("request", method = %req.method(), uri = %req.uri())
            }),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
}

/// Buffers the body (up to [`BODY_LIMIT`]), logs method, URI and size at debug, then forwards.
async fn log_request_body(request: Request<Body>, next: Next) -> Result<Response, ServerError> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, BODY_LIMIT).await.map_err(|err| {
        if exceeds_length_limit(&err) {
            ServerError::PayloadTooLarge
        } else {
            ServerError::UnreadableBody(err.to_string())
        }
    })?;
    tracing::debug!(method = %parts.method, uri = %parts.uri, body_len = bytes.len(), "request");
    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

/// True when the body failed because it passed [`BODY_LIMIT`], not because the stream broke.
fn exceeds_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

/// Turns a handler panic into a generic 500; the panic payload is logged, never returned.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = message, "handler panicked");
    ServerError::Internal.into_response()
}

async fn read_root() -> Json<Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "status": "running",
        "endpoints": {
            "health": "/health",
            "parse_pipeline": "/pipelines/parse (POST)",
            "test": "/test (POST)",
        }
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Counts nodes and edges, checks for cycles and reports per-node health.
async fn parse_pipeline(
    payload: Result<Json<Pipeline>, JsonRejection>,
) -> Result<Json<PipelineReport>, ServerError> {
    let Json(pipeline) = payload?;
    let report = pipeline_validator::parse_pipeline(&pipeline)?;
    Ok(Json(report))
}

async fn test_endpoint() -> Json<Value> {
    Json(json!({
        "test": "success",
        "message": "Backend is working correctly",
    }))
}
