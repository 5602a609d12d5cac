//! Gamezip Dupe Checker - look up curation files in the FPFSS duplicate index
//!
//! Hashes a file from a Flashpoint curation, or takes a path inside its
//! `content/` folder, and asks an FPFSS instance which cataloged games already
//! ship it.
//!
//! # Features
//!
//! - MD5, SHA1 and SHA256 streaming file digests
//! - Hash and path lookups against the FPFSS index API
//! - Launch command resolution from `meta.yaml`
//! - Plain-text duplicate reports
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use gamezip_dupe_checker::{
//!     commands::search_launch, Config, ConsoleHost, CurationPaths, LoadedCuration,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let paths = CurationPaths::new(&config.flashpoint.path, "my-curation")?;
//!     let curation = LoadedCuration::load(paths, "my-curation")?;
//!     let host = ConsoleHost::new(None, config.fpfss.access_token.clone(), false);
//!
//!     let outcome = search_launch(&config, &host, &curation, None).await?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod curation;
pub mod dedup;
pub mod error;
pub mod host;
pub mod output;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use api::FpfssApi;
pub use commands::{search_digest, search_file, search_launch, search_path, Outcome};
pub use config::{Config, HashType};
pub use curation::{CurationPaths, LoadedCuration};
pub use dedup::{hash_file, DuplicateReport};
pub use error::{Error, Result};
pub use host::{ConsoleHost, Host};
