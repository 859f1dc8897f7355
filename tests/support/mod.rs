#![allow(dead_code)]

use realty::api::Property;
use std::future::Future;
use std::time::Duration;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn property(id: u64, location: &str) -> Property {
    Property {
        id,
        title: format!("Listing {id}"),
        location: location.to_string(),
        ..Default::default()
    }
}

/// Await `future`, failing the test if it takes longer than a second
pub async fn within_a_second<T>(future: impl Future<Output = T>) -> T {
    tokio::time::timeout(Duration::from_secs(1), future)
        .await
        .expect("timed out waiting on test future")
}

/// Poll `condition` until it holds, failing the test after a second
pub async fn eventually(mut condition: impl FnMut() -> bool) {
    within_a_second(async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
}
