//! Duplicate checking module.
//!
//! Provides:
//! - Streaming file digests (MD5, SHA1, SHA256)
//! - Duplicate report formatting

pub mod hash;
pub mod report;

pub use hash::{hash_file, hash_reader};
pub use report::{DuplicateReport, NO_DUPLICATES_MESSAGE};
