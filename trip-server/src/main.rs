use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trip_server::traffic::{TrafficFeedClient, TrafficFeedConfig, TrafficService};
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Traffic feed is optional: without it every itinerary carries an
    // empty overlay
    let client = match std::env::var("TRAFFIC_FEED_URL") {
        Ok(url) => {
            let config = TrafficFeedConfig::new(url);
            Some(TrafficFeedClient::new(config).expect("Failed to create traffic feed client"))
        }
        Err(_) => {
            warn!("TRAFFIC_FEED_URL not set; traffic overlays will be empty");
            None
        }
    };

    let traffic = TrafficService::new(client);

    // Spawn the background refresh loop; it fetches at startup and then
    // every refresh interval, independent of any request's lifecycle
    tokio::spawn(traffic.clone().run_refresh_loop());

    let state = AppState::new(traffic);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Trip planning server listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health          - Health check");
    info!("  POST /trips/select    - Rank candidate itineraries");
    info!("  GET  /traffic/status  - Traffic snapshot counters");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
