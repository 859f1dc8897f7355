use crate::api::ListingBackend;
use crate::config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub backend: Arc<dyn ListingBackend>,
}
