//! Worth Calculator — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use tracing::info;
use tracing_subscriber::EnvFilter;

use worth_calculator::api::{self, AppState};
use worth_calculator::config::ServerConfig;
use worth_calculator::country::CountryTable;
use worth_calculator::metrics::Metrics;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = ServerConfig::from_env();
    let metrics = Metrics::init();

    let countries = CountryTable::load_from_file(&cfg.countries_path);
    info!(
        countries = countries.countries.len(),
        reference = %countries.reference,
        "country/PPP table loaded"
    );

    let state = AppState::new(countries, cfg.countries_path.clone());
    let app = api::router(state).merge(metrics.router());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    info!(addr = %cfg.bind_addr, "worth calculator listening");
    axum::serve(listener, app).await?;

    Ok(())
}
