//! FPFSS index API HTTP client.

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, StatusCode};
use url::Url;

use crate::api::types::{IndexResponse, PathLookupRequest};
use crate::config::HashType;
use crate::error::{Error, Result};

/// Maximum number of response characters echoed into parse errors.
const ERROR_BODY_PREVIEW: usize = 500;

/// Client for the duplicate index endpoints of an FPFSS instance.
pub struct FpfssApi {
    client: Client,
    api_base: Url,
    site_root: String,
    token: String,
}

impl FpfssApi {
    /// Create a new API client.
    ///
    /// `base_url` may point at the site root or at its `/api/` root.
    pub fn new(base_url: &str, token: String, timeout: Duration) -> Result<Self> {
        let (api_base, site_root) = split_base_url(base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gamezip-dupe-checker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base,
            site_root,
            token,
        })
    }

    /// The `/api/` root all index requests are made against.
    pub fn api_base(&self) -> &str {
        self.api_base.as_str()
    }

    /// Site root used for browser links.
    pub fn site_root(&self) -> &str {
        &self.site_root
    }

    /// Link to a game's page on the FPFSS site.
    pub fn game_url(&self, game_id: &str) -> String {
        format!("{}/web/game/{}", self.site_root, game_id)
    }

    /// Build common headers for index requests.
    fn build_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();

        let cookie = header::HeaderValue::from_str(&format!("login={}", self.token))
            .map_err(|_| Error::ConfigValidation {
                field: "access_token".to_string(),
                message: "Token contains characters not allowed in a cookie".to_string(),
            })?;

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(header::COOKIE, cookie);

        Ok(headers)
    }

    /// Start an authenticated POST request to an index endpoint.
    fn post(&self, path: &str) -> Result<RequestBuilder> {
        let url = self.api_base.join(path)?;
        tracing::debug!("POST {}", url);

        Ok(self.client.post(url).headers(self.build_headers()?))
    }

    /// Send a request and decode the index response.
    async fn send(&self, request: RequestBuilder) -> Result<IndexResponse> {
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Auth error response: {}", body);
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() {
                    "FPFSS rejected the access token"
                } else {
                    &body
                }
            )));
        }

        if !status.is_success() {
            return Err(Error::Api(format!(
                "Failed to fetch data from FPFSS API: {}",
                status
            )));
        }

        let text = response.text().await?;
        tracing::debug!("Index response: {}", text);

        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse index response: {} - Response: {}",
                e,
                text.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
            ))
        })
    }

    /// Look up cataloged files by content digest.
    pub async fn lookup_hash(&self, digest: &str, hash_type: HashType) -> Result<IndexResponse> {
        let request = self.post(&format!("index/hash/{}", digest))?;
        let response = self.send(request).await?;

        if !hash_type.matches(&response.kind) {
            return Err(Error::HashTypeMismatch {
                expected: hash_type.to_string(),
                actual: response.kind,
            });
        }

        for entry in &response.data {
            let field = entry.digest(hash_type);
            if !field.is_empty() && !field.eq_ignore_ascii_case(digest) {
                tracing::warn!(
                    "Index entry {} has {} {} (queried {})",
                    entry.path,
                    hash_type,
                    field,
                    digest
                );
            }
        }

        Ok(response)
    }

    /// Look up cataloged files by path relative to the content folder.
    pub async fn lookup_path(&self, path: &str) -> Result<IndexResponse> {
        let request = self.post("index/path")?.json(&PathLookupRequest { path });
        self.send(request).await
    }
}

/// Split a configured base URL into the API root and the site root.
fn split_base_url(base_url: &str) -> Result<(Url, String)> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let site_root = trimmed.strip_suffix("/api").unwrap_or(trimmed);
    let api_base = Url::parse(&format!("{}/api/", site_root))?;

    Ok((api_base, site_root.to_string()))
}
