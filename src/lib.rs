// Library exports for integration tests and the desktop app

pub mod api;
pub mod config;
pub mod navigation;
pub mod search;
pub mod verify;

// UI components (hidden from docs)
#[doc(hidden)]
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

// Test support (only available with test-utils feature)
#[cfg(feature = "test-utils")]
pub mod test_support;
