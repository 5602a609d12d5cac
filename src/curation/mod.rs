//! Curation module.
//!
//! Provides:
//! - Curation workspace path resolution and containment checks
//! - `meta.yaml` loading

pub mod meta;
pub mod paths;

pub use meta::{CurationMeta, LoadedCuration};
pub use paths::{normalize, CurationPaths, CONTENT_DIR};
