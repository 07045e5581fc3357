use crate::config::types::{Config, FetcherConfig, OutputConfig, SiteConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the site section: origin must be an http(s) URL with a host
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let origin = Url::parse(&config.origin)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid site origin: {}", e)))?;

    if origin.scheme() != "http" && origin.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "site origin must be http or https, got '{}'",
            origin.scheme()
        )));
    }

    if origin.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(
            "site origin has no host".to_string(),
        ));
    }

    if config.seed_list.is_empty() {
        return Err(ConfigError::Validation(
            "seed-list cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.request_timeout == 0 {
        return Err(ConfigError::Validation(
            "request-timeout must be >= 1 second".to_string(),
        ));
    }

    if config.connect_timeout == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout must be >= 1 second".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates output configuration: all four channel paths must be set
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    for (name, path) in [
        ("products-path", &config.products_path),
        ("products-pretty-path", &config.products_pretty_path),
        ("manufacturers-path", &config.manufacturers_path),
        ("manufacturers-pretty-path", &config.manufacturers_pretty_path),
    ] {
        if path.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    Ok(())
}

/// Basic email shape check: something@something.something
fn validate_email(email: &str) -> Result<(), ConfigError> {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || !parts[1].contains('.') {
        return Err(ConfigError::Validation(format!(
            "contact-email does not look like an email address: '{}'",
            email
        )));
    }
    Ok(())
}
