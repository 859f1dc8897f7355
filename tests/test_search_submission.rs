#![cfg(feature = "test-utils")]

mod support;
use std::sync::Arc;

use crate::support::{property, tracing_init, within_a_second};
use realty::navigation::{Navigation, PostPropertyQuery};
use realty::search::{SearchForm, SearchQuery, SearchStore, SearchTab, Submission, Submitter};
use realty::test_support::{BackendCall, MockListingBackend, MockReply};
use reqwest::StatusCode;

fn setup() -> (Arc<MockListingBackend>, SearchStore, Submitter) {
    tracing_init();
    let backend = Arc::new(MockListingBackend::new());
    let store = SearchStore::new(backend.clone());
    let submitter = Submitter::new(store.clone());
    (backend, store, submitter)
}

#[tokio::test]
async fn test_post_property_navigates_without_request() {
    let (backend, _store, submitter) = setup();
    let mut form = SearchForm::new(SearchTab::PostProperty);
    form.set_query("Corner plot");
    form.set_dropdown("commercial").unwrap();

    let navigation = submitter.submit(form.submission()).await;

    assert_eq!(
        navigation,
        Some(Navigation::PostProperty(PostPropertyQuery {
            title: Some("Corner plot".to_string()),
            kind: Some("commercial".to_string()),
        }))
    );
    assert!(backend.calls().is_empty());
    assert!(!submitter.is_loading());
}

#[tokio::test]
async fn test_search_stores_results_and_navigates() {
    let (backend, store, submitter) = setup();
    backend.reply_to_search(MockReply::Properties(vec![
        property(1, "Mumbai"),
        property(2, "Mumbai"),
    ]));

    let mut form = SearchForm::new(SearchTab::Rent);
    form.set_dropdown("villas").unwrap();
    form.set_query("Mumbai");
    let navigation = submitter.submit(form.submission()).await;

    assert_eq!(navigation, Some(Navigation::SearchResults));
    assert_eq!(
        backend.calls(),
        vec![BackendCall::Search(SearchQuery {
            category: "rent".to_string(),
            location: Some("Mumbai".to_string()),
            property_type: Some("villas".to_string()),
        })]
    );
    let ids: Vec<u64> = store.listing().search_results.iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2]);
}

#[tokio::test]
async fn test_default_buy_search_sends_category_only() {
    let (backend, _store, submitter) = setup();

    submitter.submit(SearchForm::default().submission()).await;

    let calls = backend.calls();
    let [BackendCall::Search(query)] = calls.as_slice() else {
        panic!("expected a single search call, got {calls:?}");
    };
    assert_eq!(query.to_query_string(), "category=buy");
}

#[tokio::test]
async fn test_failed_search_stays_put_and_keeps_results() {
    let (backend, store, submitter) = setup();
    store.set_search_results(vec![property(9, "Pune")]);
    backend.reply_to_search(MockReply::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        detail: None,
    });

    let navigation = submitter.submit(SearchForm::default().submission()).await;

    assert_eq!(navigation, None);
    assert!(!submitter.is_loading());
    // The form path has no error surface; the context is untouched
    assert_eq!(store.listing().search_results.len(), 1);
    assert_eq!(store.listing().error, None);
}

#[tokio::test]
async fn test_loading_spans_the_request_on_success() {
    let (backend, _store, submitter) = setup();
    let gate = backend.hold_requests();

    let task = tokio::spawn({
        let submitter = submitter.clone();
        async move { submitter.submit(SearchForm::default().submission()).await }
    });

    within_a_second(backend.request_entered()).await;
    assert!(submitter.is_loading());

    gate.notify_one();
    let navigation = within_a_second(task).await.unwrap();
    assert_eq!(navigation, Some(Navigation::SearchResults));
    assert!(!submitter.is_loading());
}

#[tokio::test]
async fn test_loading_spans_the_request_on_failure() {
    let (backend, _store, submitter) = setup();
    backend.reply_to_search(MockReply::Status {
        status: StatusCode::BAD_GATEWAY,
        detail: None,
    });
    let gate = backend.hold_requests();
    let mut loading = submitter.subscribe_loading();

    let task = tokio::spawn({
        let submitter = submitter.clone();
        async move { submitter.submit(SearchForm::default().submission()).await }
    });

    within_a_second(backend.request_entered()).await;
    assert!(*loading.borrow_and_update());

    gate.notify_one();
    assert_eq!(within_a_second(task).await.unwrap(), None);
    assert!(!*loading.borrow_and_update());
}

#[tokio::test]
async fn test_popular_search_uses_clicked_location() {
    let (backend, _store, submitter) = setup();
    let mut form = SearchForm::new(SearchTab::Commercial);
    form.set_query("something else");

    let submission = form.popular_search("Delhi NCR");
    assert_eq!(form.query(), "Delhi NCR");
    submitter.submit(submission).await;

    let calls = backend.calls();
    let [BackendCall::Search(query)] = calls.as_slice() else {
        panic!("expected a single search call, got {calls:?}");
    };
    assert_eq!(query.location.as_deref(), Some("Delhi NCR"));
    assert_eq!(query.category, "commercial");
    assert_eq!(query.property_type, None);
}

#[tokio::test]
async fn test_repeated_submissions_are_not_deduplicated() {
    let (backend, store, submitter) = setup();
    backend.reply_to_search(MockReply::Properties(vec![property(3, "Goa")]));
    let submission = SearchForm::default().submission();
    assert!(matches!(submission, Submission::Search(_)));

    let (first, second) = tokio::join!(
        submitter.submit(submission.clone()),
        submitter.submit(submission)
    );

    assert_eq!(first, Some(Navigation::SearchResults));
    assert_eq!(second, Some(Navigation::SearchResults));
    assert_eq!(backend.calls().len(), 2);
    assert_eq!(store.listing().search_results.len(), 1);
}
