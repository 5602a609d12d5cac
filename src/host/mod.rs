//! Interface to the application hosting the checker.
//!
//! Pickers, message boxes and credential storage belong to the host. The
//! commands only talk to it through [`Host`].

pub mod console;

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;

pub use console::ConsoleHost;

/// Button labels for an informational message.
pub const OK_BUTTONS: &[&str] = &["OK"];

/// Button labels for a report that can be copied to the log.
pub const REPORT_BUTTONS: &[&str] = &["OK", "Copy to log"];

/// Index of "Copy to log" in [`REPORT_BUTTONS`].
pub const COPY_TO_LOG: usize = 1;

/// What a picker should select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickKind {
    File,
    Directory,
}

impl fmt::Display for PickKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickKind::File => write!(f, "file"),
            PickKind::Directory => write!(f, "directory"),
        }
    }
}

/// A request to open a picker.
#[derive(Debug, Clone)]
pub struct PickRequest {
    pub title: String,
    pub kind: PickKind,
    /// Where the picker starts, normally the curation folder.
    pub default_path: PathBuf,
}

impl PickRequest {
    pub fn file(default_path: PathBuf) -> Self {
        Self {
            title: "Select a file".to_string(),
            kind: PickKind::File,
            default_path,
        }
    }

    pub fn directory(default_path: PathBuf) -> Self {
        Self {
            title: "Select a directory".to_string(),
            kind: PickKind::Directory,
            default_path,
        }
    }
}

/// Services the host application provides to the commands.
#[async_trait]
pub trait Host: Send + Sync {
    /// Ask the user for a path. `None` when the picker was dismissed.
    async fn pick(&self, request: &PickRequest) -> Option<PathBuf>;

    /// Show a message and return the index of the button pressed.
    async fn show_message(&self, title: &str, message: &str, buttons: &[&str]) -> usize;

    /// FPFSS login cookie, if the user is signed in.
    async fn access_token(&self) -> Option<String>;
}
