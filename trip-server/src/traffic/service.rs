//! Background-refreshed traffic snapshot service.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::TripResult;

use super::client::TrafficFeedClient;
use super::error::TrafficError;
use super::matcher;
use super::snapshot::TrafficSnapshot;

/// How often the feed is re-fetched.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(2 * 60);

/// Delay before the single retry after a failed fetch.
pub const RETRY_DELAY: Duration = Duration::from_secs(10);

/// Owns the current traffic snapshot and keeps it fresh.
///
/// The refresh loop is the only writer; it builds a complete new
/// [`TrafficSnapshot`] generation and swaps the shared pointer. Matching
/// passes clone the `Arc` out of the lock and work against an immutable
/// generation, so they never block on a rebuild and never observe a torn
/// one.
#[derive(Clone)]
pub struct TrafficService {
    snapshot: Arc<RwLock<Arc<TrafficSnapshot>>>,
    client: Option<TrafficFeedClient>,
}

impl TrafficService {
    /// Create a service starting from the empty snapshot.
    ///
    /// With no client configured the service still works; every itinerary
    /// simply gets an empty overlay.
    pub fn new(client: Option<TrafficFeedClient>) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(Arc::new(TrafficSnapshot::empty()))),
            client,
        }
    }

    /// Whether a feed endpoint is configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// The current snapshot generation.
    pub async fn snapshot(&self) -> Arc<TrafficSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// Fetch the feed and swap in a freshly built snapshot.
    ///
    /// On failure the previous snapshot stays in place untouched. Returns
    /// the new generation's (alert, jam) counts on success.
    pub async fn refresh(&self) -> Result<(usize, usize), TrafficError> {
        let client = self.client.as_ref().ok_or(TrafficError::NotConfigured)?;
        let feed = client.fetch().await?;

        let snapshot = Arc::new(TrafficSnapshot::from_feed(feed));
        let counts = (snapshot.alert_count(), snapshot.jam_count());

        *self.snapshot.write().await = snapshot;
        Ok(counts)
    }

    /// Attach matched traffic events to every itinerary in the batch,
    /// using whichever snapshot generation is current at the start of the
    /// call.
    pub async fn attach_traffic(&self, trips: &mut [TripResult]) {
        let snapshot = self.snapshot().await;
        matcher::attach_traffic(&snapshot, trips);
    }

    /// Run the refresh loop forever: fetch at startup, then on a fixed
    /// interval. A failed fetch is retried once after a short delay; either
    /// way the loop then resumes the regular interval.
    ///
    /// Returns immediately when no feed is configured.
    pub async fn run_refresh_loop(self) {
        if !self.is_configured() {
            info!("no traffic feed configured; skipping refresh loop");
            return;
        }

        let mut interval = tokio::time::interval(REFRESH_INTERVAL);
        loop {
            // The first tick fires immediately, covering the startup fetch
            interval.tick().await;

            match self.refresh().await {
                Ok((alerts, jams)) => {
                    info!("refreshed traffic snapshot: {alerts} alerts, {jams} jams");
                }
                Err(e) => {
                    warn!("traffic feed fetch failed: {e}; retrying once");
                    tokio::time::sleep(RETRY_DELAY).await;
                    match self.refresh().await {
                        Ok((alerts, jams)) => {
                            info!("refreshed traffic snapshot: {alerts} alerts, {jams} jams");
                        }
                        Err(e) => {
                            warn!("traffic feed retry failed: {e}; keeping last snapshot");
                        }
                    }
                }
            }
        }
    }
}
