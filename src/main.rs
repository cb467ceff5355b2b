use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voiceforge_backend::infrastructure::config::{Config, LogFormat};
use voiceforge_backend::infrastructure::db::{check_connection, create_pool};
use voiceforge_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting VoiceForge Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    // Create AWS S3 client for audio storage
    tracing::info!("Initializing S3 client with region: {}", config.aws_region);

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;

    tracing::info!(
        region = ?aws_config.region(),
        bucket = %config.audio_bucket,
        "AWS configuration loaded"
    );

    let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));

    // OpenAI client for story scene generation
    let openai_client = Arc::new(async_openai::Client::with_config(
        async_openai::config::OpenAIConfig::new().with_api_key(config.openai_api_key.clone()),
    ));

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate external adapters (storage, synthesis, persistence)
    tracing::info!("Instantiating adapters...");
    let history_repo: Arc<dyn voiceforge_backend::infrastructure::repositories::HistoryRepository> =
        Arc::new(voiceforge_backend::infrastructure::repositories::PgHistoryRepository::new(
            pool.clone(),
        ));
    let audio_store: Arc<dyn voiceforge_backend::infrastructure::storage::AudioStore> =
        Arc::new(voiceforge_backend::infrastructure::storage::S3AudioStore::new(
            s3_client,
            config.audio_bucket.clone(),
        ));
    let synthesis: Arc<dyn voiceforge_backend::infrastructure::synthesis::SynthesisBackend> =
        Arc::new(voiceforge_backend::infrastructure::synthesis::ElevenLabsClient::new(
            config.elevenlabs_api_key.clone(),
        ));

    // 2. Instantiate services (inject adapters)
    tracing::info!("Instantiating services...");
    let speech_service = Arc::new(voiceforge_backend::domain::speech::SpeechService::new(
        synthesis.clone(),
        audio_store.clone(),
        history_repo.clone(),
    ));
    let history_service = Arc::new(voiceforge_backend::domain::history::HistoryService::new(
        history_repo.clone(),
        audio_store.clone(),
    ));
    let translation_service = Arc::new(voiceforge_backend::domain::translation::TranslationService::new(
        config.google_translate_api_key.clone(),
    ));
    let story_service = Arc::new(voiceforge_backend::domain::story::StoryService::new(
        openai_client,
        synthesis.clone(),
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let speech_controller = Arc::new(voiceforge_backend::controllers::SpeechController::new(
        speech_service,
    ));
    let history_controller = Arc::new(voiceforge_backend::controllers::HistoryController::new(
        history_service,
    ));
    let translate_controller = Arc::new(voiceforge_backend::controllers::TranslateController::new(
        translation_service,
    ));
    let story_controller = Arc::new(voiceforge_backend::controllers::StoryController::new(
        story_service,
    ));

    // Start HTTP server with all routes
    start_http_server(
        pool,
        config,
        speech_controller,
        history_controller,
        translate_controller,
        story_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voiceforge_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voiceforge_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
