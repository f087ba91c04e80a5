use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tra_query::config::AppConfig;
use tra_query::stations::StationDirectory;
use tra_query::tdx::TdxClient;
use tra_query::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    if config.tdx.credentials.is_none() {
        warn!("TDX_CLIENT_ID / TDX_CLIENT_SECRET not set; using anonymous (rate-limited) access");
    }

    // Load the station table once; it is read-only from here on
    let directory = match &config.station_table {
        Some(path) => {
            let directory =
                StationDirectory::from_json_file(path).expect("Failed to load station table");
            info!(path = %path.display(), stations = directory.len(), "loaded station table");
            directory
        }
        None => {
            let directory = StationDirectory::builtin().clone();
            info!(stations = directory.len(), "using built-in station table");
            directory
        }
    };

    let tdx = TdxClient::new(config.tdx.clone()).expect("Failed to create TDX client");

    let state = AppState::new(directory, tdx);
    let app = create_router(state);

    let addr = config.bind_addr;
    info!("TRA timetable query listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET /health                  - Health check");
    info!("  GET /api/stations            - List stations");
    info!("  GET /api/stations/:name      - Look up a station code");
    info!("  GET /api/resolve?q=...       - Resolve a query to its TDX request");
    info!("  GET /api/timetable?q=...     - Resolve a query and fetch trains");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
