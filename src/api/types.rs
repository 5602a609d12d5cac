//! API response type definitions.

use serde::{Deserialize, Serialize};

use crate::config::HashType;

/// Response of the index lookup endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexResponse {
    /// Hash type the index matched on (`sha256`, `md5`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub data: Vec<IndexEntry>,
}

/// A cataloged file sharing the queried hash or path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    #[serde(default)]
    pub sha256: String,
    #[serde(default)]
    pub sha1: String,
    #[serde(default)]
    pub crc32: String,
    #[serde(default)]
    pub md5: String,
    pub path: String,
    pub size: u64,
    pub game_id: String,
    /// Milliseconds since the Unix epoch.
    pub date_added: i64,
}

impl IndexEntry {
    /// Digest field for the given hash type.
    pub fn digest(&self, hash_type: HashType) -> &str {
        match hash_type {
            HashType::Md5 => &self.md5,
            HashType::Sha1 => &self.sha1,
            HashType::Sha256 => &self.sha256,
        }
    }
}

/// Request body for path lookups.
#[derive(Debug, Serialize)]
pub struct PathLookupRequest<'a> {
    pub path: &'a str,
}
