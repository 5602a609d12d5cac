//! Path-based duplicate search.

use crate::commands::{connect, pick_within_curation, present, Outcome};
use crate::config::Config;
use crate::curation::LoadedCuration;
use crate::dedup::DuplicateReport;
use crate::error::{Error, Result};
use crate::host::{Host, PickRequest, OK_BUTTONS};
use crate::output::create_spinner;

/// Shown when a picked directory is not below `content/`.
pub const NOT_IN_CONTENT_MESSAGE: &str = "Directory is not in the content folder";

/// Search for cataloged files under a directory picked inside `content/`.
///
/// The directory is never traversed; only its path relative to `content/` is
/// sent to the index.
pub async fn search_path(
    config: &Config,
    host: &dyn Host,
    curation: &LoadedCuration,
) -> Result<Outcome> {
    let request = PickRequest::directory(curation.paths.curation_dir().to_path_buf());
    let Some(selected) = pick_within_curation(host, curation, request).await? else {
        return Ok(Outcome::Cancelled);
    };

    let relative = match curation.paths.content_relative(&selected) {
        Ok(relative) => relative,
        Err(Error::NotInContent(path)) => {
            tracing::debug!("{} is not below the content folder", path);
            host.show_message("Error", NOT_IN_CONTENT_MESSAGE, OK_BUTTONS)
                .await;
            return Ok(Outcome::Cancelled);
        }
        Err(e) => return Err(e),
    };
    tracing::info!("Checking content path: {}", relative);

    let Some(api) = connect(config, host).await? else {
        return Ok(Outcome::NoToken);
    };

    let spinner = create_spinner("Querying FPFSS index...");
    let response = api.lookup_path(&relative).await;
    spinner.finish_and_clear();

    let report = DuplicateReport::new(response?.data, api.site_root());
    Ok(present(host, &report).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CurationFixture, MockHost, StubServer};

    const TWO_ENTRIES: &str = r#"{"type":"path","data":[
        {"sha256":"a","sha1":"b","crc32":"c","md5":"d","path":"www.example.com/games/a.swf","size":10,"game_id":"g-a","date_added":0},
        {"sha256":"e","sha1":"f","crc32":"g","md5":"h","path":"www.example.com/games/b.swf","size":20,"game_id":"g-b","date_added":0}
    ]}"#;

    #[tokio::test]
    async fn test_search_path_sends_content_relative_path() {
        let server = StubServer::spawn(200, TWO_ENTRIES).await;
        let fixture = CurationFixture::new(&server.base_url);
        let dir = fixture.make_content_dir("www.example.com/games");

        let host = MockHost::new(Some(dir), Some("tok"), 0);
        let outcome = search_path(&fixture.config, &host, &fixture.curation)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Reported { duplicates: 2 });

        let requests = server.requests();
        assert_eq!(requests[0].path, "/api/index/path");
        assert_eq!(requests[0].header("cookie"), Some("login=tok"));
        let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
        assert_eq!(body["path"], "www.example.com/games");

        let message = &host.messages()[0].message;
        assert!(message.starts_with("Found 2 duplicates:"));
        assert!(message.contains("Duplicate 2:\n  Game UUID: g-b"));
    }

    #[tokio::test]
    async fn test_search_path_outside_content() {
        let server = StubServer::spawn(200, TWO_ENTRIES).await;
        let fixture = CurationFixture::new(&server.base_url);
        let dir = fixture.curation.paths.curation_dir().to_path_buf();

        let host = MockHost::new(Some(dir), Some("tok"), 0);
        let outcome = search_path(&fixture.config, &host, &fixture.curation)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(host.messages()[0].message, NOT_IN_CONTENT_MESSAGE);
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_search_path_server_error() {
        let server = StubServer::spawn(502, "").await;
        let fixture = CurationFixture::new(&server.base_url);
        let dir = fixture.make_content_dir("www.example.com");

        let host = MockHost::new(Some(dir), Some("tok"), 0);
        let err = search_path(&fixture.config, &host, &fixture.curation)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(_)));
        assert!(host.messages().is_empty());
    }
}
