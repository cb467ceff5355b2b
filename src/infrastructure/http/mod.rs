use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::{
    controllers::{
        health, HistoryController, SpeechController, StoryController, TranslateController,
    },
    infrastructure::auth::{identity_middleware, request_id_middleware},
};

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    speech_controller: Arc<SpeechController>,
    history_controller: Arc<HistoryController>,
    translate_controller: Arc<TranslateController>,
    story_controller: Arc<StoryController>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Speech pipeline; identity is best-effort, anonymous requests pass
    let speech_routes = Router::new()
        .route("/api/speech", post(SpeechController::synthesize))
        .with_state(speech_controller)
        .layer(middleware::from_fn_with_state(
            config.clone(),
            identity_middleware,
        ));

    // History surface shares the identity resolution
    let history_routes = Router::new()
        .route("/api/history", get(HistoryController::list))
        .route("/api/history/:id/audio", get(HistoryController::get_audio))
        .route("/api/history/:id", delete(HistoryController::delete))
        .with_state(history_controller)
        .layer(middleware::from_fn_with_state(
            config.clone(),
            identity_middleware,
        ));

    // Translation and story generation are public, like the speech form
    let translate_routes = Router::new()
        .route("/api/translate", post(TranslateController::translate))
        .with_state(translate_controller);

    let story_routes = Router::new()
        .route("/api/story", post(StoryController::generate))
        .with_state(story_controller);

    // Build application routes
    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool.clone())
        .merge(speech_routes)
        .merge(history_routes)
        .merge(translate_routes)
        .merge(story_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
