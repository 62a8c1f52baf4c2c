use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::catalog::Catalog;
use crate::tts::TtsService;
use crate::visits::VisitStore;

pub struct AppState {
    pub catalog: Catalog,
    pub visits: VisitStore,
    pub tts: TtsService,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let audio = ServeDir::new(state.tts.audio_dir());

    Router::new()
        .route("/flashcards", get(handlers::list_flashcards))
        .route("/categories", get(handlers::list_categories))
        .route("/tts", post(handlers::tts))
        .route("/visit_start", post(handlers::visit_start))
        .route("/visit_end", post(handlers::visit_end))
        .route("/stats", get(handlers::stats))
        .route("/health", get(handlers::health))
        .nest_service("/audio", audio)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
