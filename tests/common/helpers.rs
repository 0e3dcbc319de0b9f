use relay::http::TransportConfig;
use relay::loading::LoadingCounter;
use relay::relay::{Relay, RelayBuilder};
use reqwest::Url;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wiremock::MockServer;

// Common test constants
pub const TEST_REPORT_HEADER: &str = "filename%3Dreport.csv";

/// Creates a quiet relay bound to the given mock server.
pub async fn bound_relay(server: &MockServer) -> Relay {
    let mut relay = RelayBuilder::quiet().build();
    relay
        .bind(TransportConfig {
            base_url: Some(Url::parse(&server.uri()).expect("mock server uri")),
            ..TransportConfig::default()
        })
        .expect("failed to bind transport");
    relay
}

/// Creates a quiet relay with no transport bound.
pub fn unbound_relay() -> Relay {
    RelayBuilder::quiet().build()
}

/// Installs a counting loading counter and returns its start/stop tallies.
pub fn install_counting_loading(relay: &mut Relay) -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let starts = Arc::new(AtomicUsize::new(0));
    let stops = Arc::new(AtomicUsize::new(0));
    let start_tally = starts.clone();
    let stop_tally = stops.clone();
    relay.use_loading(
        move || {
            start_tally.fetch_add(1, Ordering::SeqCst);
        },
        move || {
            stop_tally.fetch_add(1, Ordering::SeqCst);
        },
    );
    (starts, stops)
}

/// Creates a standalone counting loading counter and its tallies.
pub fn counting_counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>, LoadingCounter) {
    let starts = Arc::new(AtomicUsize::new(0));
    let stops = Arc::new(AtomicUsize::new(0));
    let start_tally = starts.clone();
    let stop_tally = stops.clone();
    let counter = LoadingCounter::new(
        move || {
            start_tally.fetch_add(1, Ordering::SeqCst);
        },
        move || {
            stop_tally.fetch_add(1, Ordering::SeqCst);
        },
    );
    (starts, stops, counter)
}

/// Creates test file content of the given size.
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Renders a received request body as text for multipart assertions.
pub fn body_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Content-Range test vectors shared with the unit tests.
pub fn create_test_content_range_headers() -> Vec<(&'static str, Option<u64>)> {
    vec![
        ("bytes 0-1023/2048", Some(2048)),
        ("bytes 200-1023/5000", Some(5000)),
        ("bytes 0-0/1", Some(1)),
        ("invalid", None),
        ("bytes 0-1023", None),
        ("", None),
    ]
}
