//! Axum router configuration with middleware.
//!
//! Middleware (outermost first): request id assignment, HTTP tracing,
//! request id propagation, CORS, security headers, panic catching.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Request, Uri, header};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::http::error::{AppError, handle_panic};
use crate::http::handlers;
use crate::http::request_id::MakeRequestUuidV7;
use crate::state::AppState;

/// Every route served, as `(method, path, description)`. Used by the banner.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/", "Health check"),
    ("GET", "/status", "System status"),
    ("POST", "/intent", "Process intent vectors"),
    ("POST", "/verify", "Universal verification"),
    ("POST", "/nbcl/interpret", "NBCL interpretation"),
    ("GET", "/attestation", "Omega attestation"),
    ("GET", "/symbiosis", "Cosmic symbiosis status"),
    ("GET", "/synthesis", "Final synthesis check"),
];

const X_REQUEST_ID: &str = "x-request-id";

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::system::health))
        .route("/status", get(handlers::system::status))
        .route("/intent", post(handlers::intent::process_intent))
        .route("/verify", post(handlers::verify::verify_target))
        .route("/nbcl/interpret", post(handlers::nbcl::interpret))
        .route("/attestation", get(handlers::system::attestation))
        .route("/symbiosis", get(handlers::system::symbiosis))
        .route("/synthesis", get(handlers::system::synthesis))
        .fallback(not_found);

    with_middleware(routes).with_state(state)
}

/// Wrap `router` in the middleware stack.
fn with_middleware(router: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        let request_id = req
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        tracing::info_span!(
            "http",
            method = %req.method(),
            uri = %req.uri(),
            request_id = %request_id,
        )
    });

    let request_id = HeaderName::from_static(X_REQUEST_ID);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(trace)
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuidV7))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
