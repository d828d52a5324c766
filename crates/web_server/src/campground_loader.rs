use campground_list::CampgroundList;
use log::{debug, error, info};
use nps::NpsClient;
use tokio::task::JoinHandle;

/// Runs the one campground fetch issued at startup
pub struct CampgroundLoader {
    client: NpsClient,
    list: CampgroundList,
    handle: Option<JoinHandle<()>>,
}

impl CampgroundLoader {
    /// Create a loader that fills `list` from `client`
    pub fn new(client: NpsClient, list: CampgroundList) -> Self {
        Self {
            client,
            list,
            handle: None,
        }
    }

    /// Spawn the fetch in a background task
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }

        let client = self.client.clone();
        let list = self.list.clone();
        self.handle = Some(tokio::spawn(async move {
            load_campgrounds(&client, &list).await;
        }));
    }

    /// Wait for the spawned fetch to finish
    pub async fn join(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        match handle.await {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => debug!("Campground loader task cancelled"),
            Err(e) => error!("Campground loader task failed: {}", e),
        }
    }

    /// Abort the fetch if it is still running
    pub async fn stop(&mut self) {
        if let Some(ref handle) = self.handle {
            handle.abort();
        }
        self.join().await;
    }
}

impl Drop for CampgroundLoader {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Fetch campgrounds and apply the outcome to `list`.
///
/// Returns whether the list was replaced.
pub async fn load_campgrounds(client: &NpsClient, list: &CampgroundList) -> bool {
    info!("Fetching campgrounds from {}", client.redacted_url());

    let result = client.fetch_campgrounds().await;
    let replaced = list.apply(result).await;
    if replaced {
        info!("📋 Campground list now holds {} entries", list.len().await);
    }
    replaced
}
