//! Shared HTTP client and runtime
//!
//! Async reqwest behind a sync interface: the batch loop is synchronous
//! and strictly sequential, so remote calls block on a shared lazy
//! runtime. No retry policy; a failed call degrades to a sentinel label.

use std::sync::LazyLock;
use std::time::Duration;

/// Connect timeout; reads rely on the transport defaults
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
});

pub(crate) fn http_client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}

pub(crate) static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});
