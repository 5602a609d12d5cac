//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{default_config_path, Config, HashType};

/// FPFSS duplicate checker CLI.
#[derive(Parser, Debug)]
#[command(
    name = "gamezip-dupe-checker",
    version,
    about = "Check curation files against the FPFSS duplicate index",
    long_about = "Hashes a file from a Flashpoint curation (or takes a content path) and asks \
                  the FPFSS index which cataloged games already contain it."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Curation folder name under Curations/Working.
    #[arg(short = 'C', long, global = true)]
    pub curation: Option<String>,

    /// Flashpoint install directory.
    #[arg(short = 'f', long = "flashpoint-path", global = true)]
    pub flashpoint_path: Option<PathBuf>,

    /// FPFSS base URL.
    #[arg(long = "base-url", env = "FPFSS_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// FPFSS login cookie.
    #[arg(short, long, env = "FPFSS_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Digest used for hash lookups (md5, sha1, sha256; any case).
    #[arg(long = "hash-type", value_parser = parse_hash_type, global = true)]
    pub hash_type: Option<HashType>,

    /// HTTP timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Copy the duplicate report to the log.
    #[arg(long, global = true)]
    pub copy_to_log: bool,

    /// Exit with a non-zero status when duplicates are found.
    #[arg(long, global = true)]
    pub fail_on_duplicates: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Lookup to perform.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check the file the curation's launch command points at.
    Launch {
        /// Launch command to use instead of the one in meta.yaml.
        #[arg(long = "launch-command")]
        launch_command: Option<String>,
    },
    /// Check a file inside the curation folder.
    File {
        /// File to hash.
        path: PathBuf,
    },
    /// Check a directory inside the curation's content folder by path.
    Path {
        /// Directory below content/.
        path: PathBuf,
    },
    /// Look up a known digest.
    Hash {
        /// Hex digest; the hash type is inferred from its length unless --hash-type is given.
        digest: String,
    },
}

impl Command {
    /// Path handed to the picker, if any.
    pub fn selection(&self) -> Option<PathBuf> {
        match self {
            Command::File { path } | Command::Path { path } => Some(path.clone()),
            _ => None,
        }
    }
}

/// Parse `--hash-type` the same way the config file does.
fn parse_hash_type(value: &str) -> Result<HashType, String> {
    value.parse()
}

impl Args {
    /// Configuration file to read.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_config_path)
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(path) = &self.flashpoint_path {
            config.flashpoint.path = path.clone();
        }

        if let Some(base_url) = &self.base_url {
            config.fpfss.base_url = base_url.clone();
        }

        if let Some(token) = &self.token {
            config.fpfss.access_token = Some(token.clone());
        }

        if let Some(hash_type) = self.hash_type {
            config.options.hash_type = hash_type;
        }

        if let Some(timeout) = self.timeout {
            config.options.timeout_seconds = timeout;
        }
    }
}
