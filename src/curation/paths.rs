//! Curation workspace paths.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the folder holding a curation's game files.
pub const CONTENT_DIR: &str = "content";

/// Paths of one curation inside a Flashpoint install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurationPaths {
    curation_dir: PathBuf,
}

impl CurationPaths {
    /// Resolve `{flashpoint}/Curations/Working/{folder}`.
    pub fn new(flashpoint_path: &Path, folder: &str) -> Result<Self> {
        let folder = folder.trim();
        if folder.is_empty() {
            return Err(Error::Curation("Curation folder name is empty".to_string()));
        }

        let mut folder_components = Path::new(folder).components();
        if !matches!(
            (folder_components.next(), folder_components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(Error::Curation(format!(
                "Curation folder must be a single folder name: '{}'",
                folder
            )));
        }

        let root = normalize(&std::path::absolute(flashpoint_path)?);
        let curation_dir = root.join("Curations").join("Working").join(folder);

        Ok(Self { curation_dir })
    }

    pub fn curation_dir(&self) -> &Path {
        &self.curation_dir
    }

    pub fn content_dir(&self) -> PathBuf {
        self.curation_dir.join(CONTENT_DIR)
    }

    /// File a launch command points at inside the content folder.
    ///
    /// A leading `http://` or `https://` is dropped; the remainder is the
    /// host-prefixed path the content folder mirrors.
    pub fn launch_target(&self, launch_command: &str) -> Result<PathBuf> {
        let command = launch_command.trim();
        let stripped = command
            .strip_prefix("http://")
            .or_else(|| command.strip_prefix("https://"))
            .unwrap_or(command);

        if stripped.is_empty() {
            return Err(Error::Curation("Launch command is empty".to_string()));
        }

        let target = normalize(&self.content_dir().join(stripped));
        if !target.starts_with(self.content_dir()) {
            return Err(Error::NotInContent(launch_command.to_string()));
        }

        Ok(target)
    }

    /// Check that a selection lies inside the curation folder.
    ///
    /// Returns the normalized absolute path, or `None` when it escapes.
    pub fn ensure_within(&self, selected: &Path) -> Result<Option<PathBuf>> {
        let absolute = if selected.is_absolute() {
            selected.to_path_buf()
        } else {
            std::path::absolute(selected)?
        };
        let normalized = normalize(&absolute);

        if normalized.starts_with(&self.curation_dir) {
            Ok(Some(normalized))
        } else {
            Ok(None)
        }
    }

    /// Path of a selection relative to the content folder, `/`-separated.
    pub fn content_relative(&self, selected: &Path) -> Result<String> {
        let content_dir = self.content_dir();
        let relative = normalize(selected)
            .strip_prefix(&content_dir)
            .map(Path::to_path_buf)
            .map_err(|_| Error::NotInContent(selected.display().to_string()))?;

        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        if parts.is_empty() {
            return Err(Error::NotInContent(selected.display().to_string()));
        }

        Ok(parts.join("/"))
    }
}

/// Lexically resolve `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` at the root stays at the root.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }

    normalized
}
