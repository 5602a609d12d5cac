//! Duplicate search commands.
//!
//! Each command resolves something to look up (a file digest or a content
//! path), asks the index, and shows the result through the [`Host`].

pub mod hash;
pub mod path;

use std::path::PathBuf;

use crate::api::FpfssApi;
use crate::config::Config;
use crate::curation::LoadedCuration;
use crate::dedup::DuplicateReport;
use crate::error::Result;
use crate::host::{Host, PickRequest, COPY_TO_LOG, OK_BUTTONS, REPORT_BUTTONS};

pub use hash::{search_digest, search_file, search_launch};
pub use path::search_path;

/// Shown when a picked path lies outside the curation folder.
pub const NOT_IN_CURATION_MESSAGE: &str = "File is not in the curation folder";

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user dismissed the picker or picked something unusable.
    Cancelled,
    /// No FPFSS credentials, nothing was looked up.
    NoToken,
    /// The index answered and the result was shown.
    Reported { duplicates: usize },
}

/// Build an API client with the host's credentials.
async fn connect(config: &Config, host: &dyn Host) -> Result<Option<FpfssApi>> {
    let Some(token) = host.access_token().await else {
        tracing::warn!("No FPFSS access token available, skipping lookup");
        return Ok(None);
    };

    FpfssApi::new(&config.fpfss.base_url, token, config.timeout()).map(Some)
}

/// Ask the host for a path and make sure it lies inside the curation.
async fn pick_within_curation(
    host: &dyn Host,
    curation: &LoadedCuration,
    request: PickRequest,
) -> Result<Option<PathBuf>> {
    let Some(selected) = host.pick(&request).await else {
        tracing::debug!("{} dismissed", request.title);
        return Ok(None);
    };

    match curation.paths.ensure_within(&selected)? {
        Some(path) => Ok(Some(path)),
        None => {
            tracing::debug!(
                "{} is outside {}",
                selected.display(),
                curation.paths.curation_dir().display()
            );
            host.show_message("Error", NOT_IN_CURATION_MESSAGE, OK_BUTTONS)
                .await;
            Ok(None)
        }
    }
}

/// Show a report, copying it to the log when the user asks for it.
async fn present(host: &dyn Host, report: &DuplicateReport) -> Outcome {
    let message = report.render();

    if report.is_empty() {
        host.show_message("Info", &message, OK_BUTTONS).await;
    } else if host.show_message("Info", &message, REPORT_BUTTONS).await == COPY_TO_LOG {
        tracing::info!("{}", message);
    }

    Outcome::Reported {
        duplicates: report.len(),
    }
}
