// Test support utilities for both unit and integration tests

use crate::api::{ApiError, ListingBackend, Property};
use crate::search::{SearchParams, SearchQuery};
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Search(SearchQuery),
    ListProperties(SearchParams),
    VerifyEmail(String),
}

/// Scripted reply for the next calls of one kind
#[derive(Debug, Clone)]
pub enum MockReply {
    Properties(Vec<Property>),
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
}

impl MockReply {
    fn into_result(self) -> Result<Vec<Property>, ApiError> {
        match self {
            MockReply::Properties(properties) => Ok(properties),
            MockReply::Status { status, detail } => Err(ApiError::Status { status, detail }),
        }
    }
}

/// Mock listing backend for testing
///
/// Records every call, answers from scripted replies, and can hold
/// requests open until released so in-flight state can be observed.
pub struct MockListingBackend {
    calls: Mutex<Vec<BackendCall>>,
    search_reply: Mutex<MockReply>,
    listing_reply: Mutex<MockReply>,
    verify_reply: Mutex<Result<(), (StatusCode, Option<String>)>>,
    gate: Mutex<Option<Arc<Notify>>>,
    entered: Notify,
}

impl Default for MockListingBackend {
    fn default() -> Self {
        MockListingBackend {
            calls: Mutex::new(Vec::new()),
            search_reply: Mutex::new(MockReply::Properties(Vec::new())),
            listing_reply: Mutex::new(MockReply::Properties(Vec::new())),
            verify_reply: Mutex::new(Ok(())),
            gate: Mutex::new(None),
            entered: Notify::new(),
        }
    }
}

impl MockListingBackend {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_to_search(&self, reply: MockReply) {
        *self.search_reply.lock().unwrap() = reply;
    }

    pub fn reply_to_listing(&self, reply: MockReply) {
        *self.listing_reply.lock().unwrap() = reply;
    }

    pub fn reject_verification(&self, status: StatusCode, detail: Option<&str>) {
        *self.verify_reply.lock().unwrap() = Err((status, detail.map(str::to_string)));
    }

    /// Hold every request until the returned handle is notified
    pub fn hold_requests(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Resolves once a request has reached the backend
    pub async fn request_entered(&self) {
        self.entered.notified().await;
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn listing_calls(&self) -> Vec<SearchParams> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                BackendCall::ListProperties(params) => Some(params),
                _ => None,
            })
            .collect()
    }

    async fn record(&self, call: BackendCall) {
        self.calls.lock().unwrap().push(call);
        self.entered.notify_one();
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait::async_trait]
impl ListingBackend for MockListingBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Property>, ApiError> {
        self.record(BackendCall::Search(query.clone())).await;
        self.search_reply.lock().unwrap().clone().into_result()
    }

    async fn list_properties(&self, params: &SearchParams) -> Result<Vec<Property>, ApiError> {
        self.record(BackendCall::ListProperties(params.clone())).await;
        self.listing_reply.lock().unwrap().clone().into_result()
    }

    async fn verify_email(&self, token: &str) -> Result<(), ApiError> {
        self.record(BackendCall::VerifyEmail(token.to_string())).await;
        self.verify_reply
            .lock()
            .unwrap()
            .clone()
            .map_err(|(status, detail)| ApiError::Status { status, detail })
    }
}
