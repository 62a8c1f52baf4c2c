use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use flashcards_server::api::routes::{create_router, AppState};
use flashcards_server::catalog::Catalog;
use flashcards_server::config::Config;
use flashcards_server::tts::{GoogleTranslateTts, TtsService};
use flashcards_server::visits::VisitStore;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let config = Config::from_env();

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!("Flashcards Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Public base URL: {}", config.base_url);
    tracing::info!("Audio directory: {}", config.audio_dir.display());

    let catalog = Catalog::build();
    tracing::info!("Loaded {} flashcards", catalog.len());

    let visits = VisitStore::open(&config.visits_file).expect("Failed to open visit store");
    tracing::info!("Visit store: {}", visits.path().display());

    let synthesizer = GoogleTranslateTts::new().expect("Failed to create speech client");
    let tts = TtsService::new(
        Box::new(synthesizer),
        config.audio_dir.clone(),
        config.base_url.clone(),
        config.tts_lang.clone(),
        config.audio_max_age,
    )
    .expect("Failed to prepare audio directory");

    // Create app state
    let state = Arc::new(AppState {
        catalog,
        visits,
        tts,
    });

    // Create router
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server error");
}
