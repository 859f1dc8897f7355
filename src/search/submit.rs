use super::form::Submission;
use super::store::SearchStore;
use crate::navigation::Navigation;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

/// Runs search-form submissions and tracks whether one is in flight.
///
/// Search results go straight into the shared [`SearchStore`]. Failed
/// searches are logged and otherwise swallowed: the caller gets `None`
/// and stays where it is.
#[derive(Clone)]
pub struct Submitter {
    store: SearchStore,
    loading: Arc<watch::Sender<bool>>,
}

struct BusyGuard<'a>(&'a watch::Sender<bool>);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

impl Submitter {
    pub fn new(store: SearchStore) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            store,
            loading: Arc::new(loading),
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Execute a submission, returning where to navigate on success
    pub async fn submit(&self, submission: Submission) -> Option<Navigation> {
        self.loading.send_replace(true);
        let _busy = BusyGuard(&self.loading);

        match submission {
            Submission::Navigate(navigation) => {
                info!("Navigating to {:?}", navigation);
                Some(navigation)
            }
            Submission::Search(query) => match self.store.backend().search(&query).await {
                Ok(results) => {
                    info!(
                        "Search '{}' returned {} result(s)",
                        query.to_query_string(),
                        results.len()
                    );
                    self.store.set_search_results(results);
                    Some(Navigation::SearchResults)
                }
                Err(e) => {
                    error!("Error during search: {}", e);
                    None
                }
            },
        }
    }
}
