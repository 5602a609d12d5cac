//! Curation metadata (`meta.yaml`).

use std::fs;

use serde::Deserialize;

use crate::curation::paths::CurationPaths;
use crate::error::{Error, Result};

/// Metadata file at the root of every curation folder.
pub const META_FILE: &str = "meta.yaml";

/// Fields of `meta.yaml` the checker reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurationMeta {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,

    #[serde(rename = "Launch Command", default)]
    pub launch_command: Option<String>,
}

/// A curation opened for checking.
#[derive(Debug, Clone)]
pub struct LoadedCuration {
    pub folder: String,
    pub paths: CurationPaths,
    pub meta: CurationMeta,
}

impl LoadedCuration {
    /// Open a curation, reading its `meta.yaml` when present.
    pub fn load(paths: CurationPaths, folder: &str) -> Result<Self> {
        let curation_dir = paths.curation_dir();
        if !curation_dir.is_dir() {
            return Err(Error::Curation(format!(
                "Curation folder not found: {}",
                curation_dir.display()
            )));
        }

        let meta_path = curation_dir.join(META_FILE);
        let meta = if meta_path.is_file() {
            let content = fs::read_to_string(&meta_path)?;
            // serde_yaml_ng maps an empty document to unit, not a struct
            if content.trim().is_empty() {
                CurationMeta::default()
            } else {
                serde_yaml_ng::from_str(&content)?
            }
        } else {
            tracing::debug!("No {} in {}", META_FILE, curation_dir.display());
            CurationMeta::default()
        };

        Ok(Self {
            folder: folder.to_string(),
            paths,
            meta,
        })
    }

    /// Launch command to check, preferring an explicit override.
    pub fn launch_command<'a>(&'a self, override_command: Option<&'a str>) -> Result<&'a str> {
        override_command
            .or(self.meta.launch_command.as_deref())
            .filter(|command| !command.trim().is_empty())
            .ok_or_else(|| {
                Error::Curation(format!(
                    "Curation '{}' has no launch command",
                    self.folder
                ))
            })
    }

    /// Display name for messages.
    pub fn display_name(&self) -> &str {
        self.meta.title.as_deref().unwrap_or(&self.folder)
    }
}
