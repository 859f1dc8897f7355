use crate::api::Property;
use crate::search::{ListingState, SearchParams, SearchParamsUpdate, SearchStore};
use crate::AppContext;
use dioxus::prelude::*;
use tracing::debug;

/// Search state shared across the app.
///
/// The [`SearchStore`] is the source of truth; the signals mirror it so
/// components re-render when parameters or results change.
#[derive(Clone)]
pub struct SearchContext {
    pub store: SearchStore,
    pub search_params: Signal<SearchParams>,
    pub listing: Signal<ListingState>,
}

impl SearchContext {
    pub fn set_search_params(&self, update: SearchParamsUpdate) {
        self.store.set_search_params(update);
    }

    pub fn set_search_results(&self, results: Vec<Property>) {
        self.store.set_search_results(results);
    }

    /// Manual refresh outside the automatic parameter-driven fetches
    pub fn fetch_properties(&self) {
        let store = self.store.clone();
        spawn(async move {
            store.fetch_properties().await;
        });
    }
}

/// Provider component to make search context available throughout the app
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let app_context = use_context::<AppContext>();
    let store = use_hook(|| SearchStore::new(app_context.backend.clone()));
    let mut search_params = use_signal(|| store.search_params());
    let mut listing = use_signal(|| store.listing());

    use_effect({
        let store = store.clone();
        move || {
            debug!("Search context mounted, starting auto-fetch");
            spawn(store.clone().run_auto_fetch());

            let mut params_rx = store.subscribe_params();
            spawn(async move {
                loop {
                    search_params.set(params_rx.borrow_and_update().clone());
                    if params_rx.changed().await.is_err() {
                        break;
                    }
                }
            });

            let mut listing_rx = store.subscribe_listing();
            spawn(async move {
                loop {
                    listing.set(listing_rx.borrow_and_update().clone());
                    if listing_rx.changed().await.is_err() {
                        break;
                    }
                }
            });
        }
    });

    use_context_provider(|| SearchContext {
        store: store.clone(),
        search_params,
        listing,
    });

    rsx! {
        {children}
    }
}

/// Hook to access the shared search context
pub fn use_search() -> SearchContext {
    use_context::<SearchContext>()
}
