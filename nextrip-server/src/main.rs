use nextrip_server::config::ServerConfig;
use nextrip_server::nextrip::NexTripClient;
use nextrip_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,nextrip_server=debug")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let client = match NexTripClient::new(config.nextrip.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create NexTrip client: {e}");
            std::process::exit(1);
        }
    };

    let app = create_router(AppState::new(client));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    info!(
        base_url = %config.nextrip.base_url,
        timeout_secs = config.nextrip.timeout_secs,
        "Departure server listening on http://{}",
        config.bind_addr
    );
    info!("  GET /health                    - Health check");
    info!("  GET /{{name}}/{{stop}}/{{direction}} - Next departures (?format=0-3&amount=1-3)");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
