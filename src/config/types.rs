use serde::Deserialize;

/// Main configuration structure for Brandweave
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// The catalog site being extracted
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site origin, used to resolve relative asset paths (e.g. logos)
    pub origin: String,

    /// Path to the seed URL list, one URL per line
    #[serde(rename = "seed-list")]
    pub seed_list: String,
}

/// Fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Whole-request timeout (seconds)
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout", default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the extractor
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the extractor
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the extractor
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Output configuration: the four JSONL channels
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Compact product records, one JSON object per line
    #[serde(rename = "products-path")]
    pub products_path: String,

    /// Pretty-printed product records
    #[serde(rename = "products-pretty-path")]
    pub products_pretty_path: String,

    /// Compact manufacturer records, one JSON object per line
    #[serde(rename = "manufacturers-path")]
    pub manufacturers_path: String,

    /// Pretty-printed manufacturer records
    #[serde(rename = "manufacturers-pretty-path")]
    pub manufacturers_pretty_path: String,
}
