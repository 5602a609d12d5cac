//! Hash-based duplicate searches.

use std::path::PathBuf;

use crate::commands::{connect, pick_within_curation, present, Outcome};
use crate::config::{validate_digest, Config, HashType};
use crate::curation::LoadedCuration;
use crate::dedup::{hash_file, DuplicateReport};
use crate::error::{Error, Result};
use crate::host::{Host, PickRequest};
use crate::output::create_spinner;

/// Search for duplicates of the file the curation's launch command points at.
pub async fn search_launch(
    config: &Config,
    host: &dyn Host,
    curation: &LoadedCuration,
    launch_command: Option<&str>,
) -> Result<Outcome> {
    let command = curation.launch_command(launch_command)?;
    let target = curation.paths.launch_target(command)?;
    tracing::info!("Checking launch command target: {}", target.display());

    let hash_type = config.options.hash_type;
    let digest = compute_digest(target, hash_type).await?;

    lookup_digest(config, host, &digest, hash_type).await
}

/// Search for duplicates of a file picked inside the curation folder.
pub async fn search_file(
    config: &Config,
    host: &dyn Host,
    curation: &LoadedCuration,
) -> Result<Outcome> {
    let request = PickRequest::file(curation.paths.curation_dir().to_path_buf());
    let Some(selected) = pick_within_curation(host, curation, request).await? else {
        return Ok(Outcome::Cancelled);
    };

    let hash_type = config.options.hash_type;
    let digest = compute_digest(selected, hash_type).await?;

    lookup_digest(config, host, &digest, hash_type).await
}

/// Search for duplicates of an already known digest.
pub async fn search_digest(
    config: &Config,
    host: &dyn Host,
    digest: &str,
    hash_type: HashType,
) -> Result<Outcome> {
    let digest = validate_digest(digest, hash_type)?;
    lookup_digest(config, host, &digest, hash_type).await
}

/// Hash a file on the blocking pool.
async fn compute_digest(path: PathBuf, hash_type: HashType) -> Result<String> {
    let spinner = create_spinner(&format!("Computing {} of {}", hash_type, path.display()));

    let result = tokio::task::spawn_blocking(move || hash_file(&path, hash_type))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e)));

    spinner.finish_and_clear();
    let digest = result??;

    tracing::info!("{}: {}", hash_type, digest);
    Ok(digest)
}

async fn lookup_digest(
    config: &Config,
    host: &dyn Host,
    digest: &str,
    hash_type: HashType,
) -> Result<Outcome> {
    let Some(api) = connect(config, host).await? else {
        return Ok(Outcome::NoToken);
    };

    let spinner = create_spinner("Querying FPFSS index...");
    let response = api.lookup_hash(digest, hash_type).await;
    spinner.finish_and_clear();

    let report = DuplicateReport::new(response?.data, api.site_root());
    Ok(present(host, &report).await)
}
