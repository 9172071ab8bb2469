use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use notecraft_api::{logging, router, AppConfig, AppState, LogConfig};
use notecraft_db::Database;
use notecraft_inference::OpenAIBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   LOG_FILE    - path to log file (optional, enables file logging)
    //   LOG_ANSI    - "true"/"false" override ANSI colors (auto-detected by default)
    //   RUST_LOG    - standard env filter (default: logging::DEFAULT_FILTER)
    let log_config = LogConfig::from_env();
    let _file_guard = logging::init(&log_config);

    info!(
        log_format = %log_config.format,
        log_file = log_config.file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    // Refuses to start without a model credential.
    let config = AppConfig::from_env()?;

    let backend = Arc::new(OpenAIBackend::new(config.model.clone())?);
    let db = Database::connect(&config.database_url).await?;
    info!(database_url = %config.database_url, "Database ready");

    let state = AppState::new(backend, Arc::new(db.notes.clone()));
    let app = router(state, &config);

    if let Some(dir) = &config.static_dir {
        info!(static_dir = %dir.display(), "Serving web client");
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
