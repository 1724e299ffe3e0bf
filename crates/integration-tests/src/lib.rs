//! Integration tests for Marquee.
//!
//! The tests in `tests/` exercise a running admin service over its JSON
//! API, so they are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! cargo run -p marquee-cli -- migrate
//!
//! # Start the admin service
//! cargo run -p marquee-admin
//!
//! # Run the ignored integration tests
//! cargo test -p marquee-integration-tests -- --ignored
//! ```
//!
//! Set `MARQUEE_BASE_URL` when the admin service is not on
//! `http://localhost:4000`.

/// Base URL for the admin API (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("MARQUEE_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}

/// Plain HTTP client; the admin API carries no session state.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn api_client() -> reqwest::Client {
    reqwest::Client::builder().build().unwrap()
}

/// A unique entity name so concurrent test runs do not collide.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}
