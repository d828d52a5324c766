use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, error};
use nps::{Campground, NpsError};
use tokio::sync::RwLock;

use crate::campground_row::CampgroundRow;

/// In-memory list of campgrounds shared between the loader and the handlers
#[derive(Clone, Default)]
pub struct CampgroundList {
    state: Arc<RwLock<ListState>>,
}

#[derive(Debug, Default)]
struct ListState {
    campgrounds: Vec<Campground>,

    /// When the list was last replaced
    updated_at: Option<DateTime<Utc>>,
}

impl CampgroundList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding `campgrounds`
    pub fn with_campgrounds(campgrounds: Vec<Campground>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ListState {
                campgrounds,
                updated_at: None,
            })),
        }
    }

    /// Replace the whole list
    pub async fn replace(&self, campgrounds: Vec<Campground>) {
        for campground in &campgrounds {
            debug!(
                "Campground: {}, Images: {}",
                campground.name.as_deref().unwrap_or("<unnamed>"),
                campground.image_count()
            );
        }

        let mut state = self.state.write().await;
        state.campgrounds = campgrounds;
        state.updated_at = Some(Utc::now());
        debug!("Campgrounds in list: {}", state.campgrounds.len());
    }

    /// Apply the outcome of a fetch.
    ///
    /// Failures are logged and leave the list untouched. Returns whether the
    /// list was replaced.
    pub async fn apply(&self, result: Result<Vec<Campground>, NpsError>) -> bool {
        match result {
            Ok(campgrounds) => {
                debug!("Adding {} campgrounds to list", campgrounds.len());
                self.replace(campgrounds).await;
                true
            }
            Err(e) => {
                error!(
                    "Failed to fetch campgrounds: {}",
                    e.status().map_or_else(|| "no status".to_string(), |s| s.to_string())
                );
                error!("Response: {}", e.response().unwrap_or("<none>"));
                error!("Error: {}", e);
                false
            }
        }
    }

    /// Display rows for every campground
    pub async fn rows(&self) -> Vec<CampgroundRow> {
        let state = self.state.read().await;
        state.campgrounds.iter().map(CampgroundRow::from).collect()
    }

    /// Display rows together with the time they were fetched, read under one lock
    pub async fn rows_with_updated_at(&self) -> (Vec<CampgroundRow>, Option<DateTime<Utc>>) {
        let state = self.state.read().await;
        let rows = state.campgrounds.iter().map(CampgroundRow::from).collect();
        (rows, state.updated_at)
    }

    /// Display row at `index`
    pub async fn row(&self, index: usize) -> Option<CampgroundRow> {
        let state = self.state.read().await;
        state.campgrounds.get(index).map(CampgroundRow::from)
    }

    /// Number of campgrounds
    pub async fn len(&self) -> usize {
        self.state.read().await.campgrounds.len()
    }

    /// Whether the list is empty
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.campgrounds.is_empty()
    }

    /// When the list was last replaced by a fetch
    pub async fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Campground {
        Campground {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_replace_clears_previous_entries() {
        let list = CampgroundList::with_campgrounds(vec![Campground::placeholder()]);
        assert_eq!(list.len().await, 1);
        assert!(list.updated_at().await.is_none());

        list.replace(vec![named("Elkmont"), named("Cades Cove")]).await;

        let names: Vec<_> = list
            .rows()
            .await
            .into_iter()
            .filter_map(|row| row.name)
            .collect();
        assert_eq!(names, vec!["Elkmont", "Cades Cove"]);
        assert!(list.updated_at().await.is_some());
    }

    #[tokio::test]
    async fn test_apply_failure_keeps_list() {
        let list = CampgroundList::with_campgrounds(vec![Campground::placeholder()]);

        let changed = list
            .apply(Err(NpsError::Http {
                status: 500,
                body: "oops".to_string(),
            }))
            .await;
        assert!(!changed);

        let changed = list
            .apply(Err(NpsError::DataFormat("not json".to_string())))
            .await;
        assert!(!changed);

        assert_eq!(
            list.rows().await,
            vec![CampgroundRow::from(&Campground::placeholder())]
        );
        assert!(list.updated_at().await.is_none());
    }

    #[tokio::test]
    async fn test_apply_success_replaces_list() {
        let list = CampgroundList::new();
        assert!(list.is_empty().await);

        assert!(list.apply(Ok(vec![named("Smokemont")])).await);
        assert_eq!(list.len().await, 1);

        // An empty successful response still replaces the list
        assert!(list.apply(Ok(Vec::new())).await);
        assert!(list.is_empty().await);
    }

    #[tokio::test]
    async fn test_rows() {
        let list = CampgroundList::with_campgrounds(vec![Campground::placeholder(), named("Elkmont")]);

        let rows = list.rows().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].lat_long, "(47.5, -120.5)");
        assert_eq!(rows[1].name.as_deref(), Some("Elkmont"));
        assert_eq!(rows[1].lat_long, "(0.0, 0.0)");

        assert!(list.row(1).await.is_some());
        assert!(list.row(2).await.is_none());
    }

    #[tokio::test]
    async fn test_rows_with_updated_at() {
        let list = CampgroundList::with_campgrounds(vec![Campground::placeholder()]);
        let (rows, updated_at) = list.rows_with_updated_at().await;
        assert_eq!(rows.len(), 1);
        assert!(updated_at.is_none());

        list.replace(vec![named("Elkmont"), named("Cades Cove")]).await;
        let (rows, updated_at) = list.rows_with_updated_at().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(updated_at, list.updated_at().await);
        assert!(updated_at.is_some());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let list = CampgroundList::new();
        let handle = list.clone();
        handle.replace(vec![named("Look Rock")]).await;
        assert_eq!(list.len().await, 1);
    }
}
