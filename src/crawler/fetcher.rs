//! HTTP fetcher
//!
//! A deliberately thin layer: one GET per page, explicit timeouts, a
//! descriptive user agent. Retries, rate limiting, and robots handling
//! belong to whatever crawling infrastructure feeds this pipeline, not
//! here.

use crate::config::{FetcherConfig, UserAgentConfig};
use crate::BrandweaveError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for all page fetches
///
/// # Example
///
/// ```no_run
/// use brandweave::config::{FetcherConfig, UserAgentConfig};
/// use brandweave::crawler::build_http_client;
///
/// let user_agent = UserAgentConfig {
///     crawler_name: "Brandweave".to_string(),
///     crawler_version: "1.0".to_string(),
///     contact_url: "https://example.com/about".to_string(),
///     contact_email: "admin@example.com".to_string(),
/// };
///
/// let client = build_http_client(&user_agent, &FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    fetcher: &FetcherConfig,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        user_agent.crawler_name,
        user_agent.crawler_version,
        user_agent.contact_url,
        user_agent.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(fetcher.request_timeout))
        .connect_timeout(Duration::from_secs(fetcher.connect_timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body, treating any non-success status as a failure
///
/// Failures here are page-local: the pipeline logs them and moves on to the
/// next URL.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, BrandweaveError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| BrandweaveError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(BrandweaveError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|source| BrandweaveError::Http {
            url: url.to_string(),
            source,
        })
}
