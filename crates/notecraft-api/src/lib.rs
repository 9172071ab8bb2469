//! # notecraft-api
//!
//! HTTP surface for notecraft: note generation and translation backed by a
//! hosted language model, plus basic note storage.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::warn;
use uuid::Uuid;

use notecraft_core::{defaults, GenerationBackend, NoteRepository};

pub use config::{AppConfig, LogConfig};
pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn GenerationBackend>,
    pub notes: Arc<dyn NoteRepository>,
}

impl AppState {
    pub fn new(backend: Arc<dyn GenerationBackend>, notes: Arc<dyn NoteRepository>) -> Self {
        Self { backend, notes }
    }
}

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(defaults::CORS_MAX_AGE_SECS));

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}

/// Build the application router.
pub fn router(state: AppState, config: &AppConfig) -> Router {
    use handlers::{notes, pipeline};

    let mut app = Router::new()
        .route("/health", get(pipeline::health))
        .route("/generate", post(pipeline::generate))
        .route("/translate", post(pipeline::translate))
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route("/notes/generate", post(notes::generate_note))
        .route(
            "/notes/:id",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        );

    // Serve the built web client for everything else, falling back to
    // index.html so client-side routes resolve.
    if let Some(dir) = &config.static_dir {
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors_layer(config))
        .layer(RequestBodyLimitLayer::new(defaults::MAX_BODY_SIZE_BYTES))
        .with_state(state)
}
