//! Outbound HTTP collaborators: the poem endpoint and the holiday calendar.
//! Both are single-attempt fetches that degrade to constant fallbacks; no
//! failure here ever reaches the caller.

pub mod holiday;
pub mod poem;

use std::time::Duration;

/// Request timeout applied to both fetchers.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) fn http_client() -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
}
