use super::query::{SearchParams, SearchParamsUpdate};
use crate::api::{ListingBackend, Property};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info};

pub const FETCH_ERROR_MESSAGE: &str = "Failed to load properties. Please try again later.";

/// Snapshot of the most recent listing fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingState {
    pub search_results: Vec<Property>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Shared search state: canonical parameters plus the last result set.
///
/// Parameter changes are published on a watch channel; [`SearchStore::run_auto_fetch`]
/// listens on it and refetches after every change. Cloning is cheap and all
/// clones share the same state.
#[derive(Clone)]
pub struct SearchStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    backend: Arc<dyn ListingBackend>,
    params: watch::Sender<SearchParams>,
    listing: watch::Sender<ListingState>,
}

/// Clears `loading` however the fetch ends, including cancellation
struct LoadingGuard<'a>(&'a watch::Sender<ListingState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|listing| listing.loading = false);
    }
}

impl SearchStore {
    pub fn new(backend: Arc<dyn ListingBackend>) -> Self {
        let (params, _) = watch::channel(SearchParams::default());
        let (listing, _) = watch::channel(ListingState::default());
        Self {
            inner: Arc::new(StoreInner {
                backend,
                params,
                listing,
            }),
        }
    }

    pub fn backend(&self) -> Arc<dyn ListingBackend> {
        self.inner.backend.clone()
    }

    pub fn search_params(&self) -> SearchParams {
        self.inner.params.borrow().clone()
    }

    /// Merge a partial update. Observers are notified even when the merged
    /// value is unchanged, so every call leads to a refetch.
    pub fn set_search_params(&self, update: SearchParamsUpdate) {
        debug!("Merging search params: {:?}", update);
        self.inner.params.send_modify(|params| params.merge(update));
    }

    pub fn subscribe_params(&self) -> watch::Receiver<SearchParams> {
        self.inner.params.subscribe()
    }

    pub fn listing(&self) -> ListingState {
        self.inner.listing.borrow().clone()
    }

    pub fn subscribe_listing(&self) -> watch::Receiver<ListingState> {
        self.inner.listing.subscribe()
    }

    /// Replace the result set without fetching (used by the search form)
    pub fn set_search_results(&self, results: Vec<Property>) {
        self.inner
            .listing
            .send_modify(|listing| listing.search_results = results);
    }

    /// Fetch the listing for the current parameters
    pub async fn fetch_properties(&self) {
        let params = self.search_params();
        self.inner.listing.send_modify(|listing| {
            listing.loading = true;
            listing.error = None;
        });
        let _loading = LoadingGuard(&self.inner.listing);

        match self.inner.backend.list_properties(&params).await {
            Ok(results) => {
                info!("Loaded {} listing(s) for {:?}", results.len(), params);
                self.inner
                    .listing
                    .send_modify(|listing| listing.search_results = results);
            }
            Err(e) => {
                error!("Failed to fetch properties: {}", e);
                self.inner.listing.send_modify(|listing| {
                    listing.error = Some(FETCH_ERROR_MESSAGE.to_string());
                    listing.search_results.clear();
                });
            }
        }
    }

    /// Fetch once now, then once after every parameter change.
    ///
    /// Changes that arrive while a fetch is in flight collapse into a single
    /// follow-up fetch with the latest parameters. Runs until cancelled.
    pub async fn run_auto_fetch(self) {
        let mut changes = self.subscribe_params();
        loop {
            self.fetch_properties().await;
            if changes.changed().await.is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::search::query::SearchQuery;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    /// Backend that answers listing requests from a fixed script
    struct ScriptedBackend {
        fail: bool,
        seen: Mutex<Vec<SearchParams>>,
    }

    #[async_trait::async_trait]
    impl ListingBackend for ScriptedBackend {
        async fn search(&self, _query: &SearchQuery) -> Result<Vec<Property>, ApiError> {
            unreachable!("store never calls the search endpoint")
        }

        async fn list_properties(&self, params: &SearchParams) -> Result<Vec<Property>, ApiError> {
            self.seen.lock().unwrap().push(params.clone());
            if self.fail {
                Err(ApiError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    detail: None,
                })
            } else {
                Ok(vec![Property {
                    id: 1,
                    location: params.location.clone(),
                    ..Default::default()
                }])
            }
        }

        async fn verify_email(&self, _token: &str) -> Result<(), ApiError> {
            unreachable!("store never verifies email")
        }
    }

    fn store(fail: bool) -> (SearchStore, Arc<ScriptedBackend>) {
        let backend = Arc::new(ScriptedBackend {
            fail,
            seen: Mutex::new(Vec::new()),
        });
        (SearchStore::new(backend.clone()), backend)
    }

    #[tokio::test]
    async fn test_fetch_success_replaces_results() {
        let (store, backend) = store(false);
        store.set_search_params(SearchParamsUpdate::default().location("Goa"));
        store.fetch_properties().await;

        let listing = store.listing();
        assert!(!listing.loading);
        assert_eq!(listing.error, None);
        assert_eq!(listing.search_results.len(), 1);
        assert_eq!(listing.search_results[0].location, "Goa");
        assert_eq!(backend.seen.lock().unwrap()[0].location, "Goa");
    }

    #[tokio::test]
    async fn test_fetch_failure_sets_message_and_clears_results() {
        let (store, _backend) = store(true);
        store.set_search_results(vec![Property::default(), Property::default()]);
        store.fetch_properties().await;

        let listing = store.listing();
        assert!(!listing.loading);
        assert_eq!(listing.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(listing.search_results.is_empty());
    }

    #[tokio::test]
    async fn test_next_fetch_clears_previous_error() {
        let (store, _) = store(false);
        store
            .inner
            .listing
            .send_modify(|l| l.error = Some(FETCH_ERROR_MESSAGE.to_string()));
        store.fetch_properties().await;
        assert_eq!(store.listing().error, None);
    }

    #[test]
    fn test_set_search_params_merges_and_notifies() {
        let (store, _) = store(false);
        let mut changes = store.subscribe_params();
        store.set_search_params(SearchParamsUpdate::default().keyword("garden"));
        store.set_search_params(SearchParamsUpdate::default().location("X"));

        assert!(changes.has_changed().unwrap());
        let params = changes.borrow_and_update().clone();
        assert_eq!(params.location, "X");
        assert_eq!(params.keyword, "garden");
        assert_eq!(params.property_type, "");
    }
}
