//! Configuration validation logic.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::config::hash_type::HashType;
use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url(&config.fpfss.base_url)?;
    validate_flashpoint_path(config)?;

    if let Some(token) = &config.fpfss.access_token {
        validate_token(token)?;
    }

    if config.options.timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    Ok(())
}

/// Validate the FPFSS base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.trim().is_empty() {
        return Err(Error::MissingConfig("base_url".to_string()));
    }

    let url = Url::parse(base_url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Unsupported URL scheme '{}'", url.scheme()),
        });
    }

    if url.host_str().is_none() {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("URL has no host: {}", base_url),
        });
    }

    Ok(())
}

/// Validate the Flashpoint install path.
pub fn validate_flashpoint_path(config: &Config) -> Result<()> {
    if config.flashpoint.path.as_os_str().is_empty() {
        return Err(Error::MissingConfig("flashpoint.path".to_string()));
    }

    Ok(())
}

/// Validate the FPFSS access token.
pub fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "access_token".to_string(),
            message: "Token is empty".to_string(),
        });
    }

    // Check for placeholder values
    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_token") {
        return Err(Error::ConfigValidation {
            field: "access_token".to_string(),
            message: "Token appears to be a placeholder. Please provide your FPFSS login cookie."
                .to_string(),
        });
    }

    Ok(())
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9a-fA-F]+$").expect("valid hex pattern"))
}

/// Validate a hex digest for the given hash type.
///
/// Returns the digest lowercased.
pub fn validate_digest(digest: &str, hash_type: HashType) -> Result<String> {
    let digest = digest.trim();

    if !hex_pattern().is_match(digest) {
        return Err(Error::ConfigValidation {
            field: "digest".to_string(),
            message: format!("'{}' is not a hex string", digest),
        });
    }

    if digest.len() != hash_type.digest_len() {
        return Err(Error::ConfigValidation {
            field: "digest".to_string(),
            message: format!(
                "{} digest must be {} characters (got {})",
                hash_type,
                hash_type.digest_len(),
                digest.len()
            ),
        });
    }

    Ok(digest.to_lowercase())
}
