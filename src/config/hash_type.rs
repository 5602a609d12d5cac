//! Hash type definitions.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Digest algorithms understood by the duplicate index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashType {
    Md5,
    Sha1,
    /// Default, matches the index's primary key.
    #[default]
    Sha256,
}

impl HashType {
    /// Length of a hex-encoded digest of this type.
    pub fn digest_len(&self) -> usize {
        match self {
            HashType::Md5 => 32,
            HashType::Sha1 => 40,
            HashType::Sha256 => 64,
        }
    }

    /// Infer the hash type from the length of a hex digest.
    pub fn from_digest(digest: &str) -> Option<Self> {
        match digest.trim().len() {
            32 => Some(HashType::Md5),
            40 => Some(HashType::Sha1),
            64 => Some(HashType::Sha256),
            _ => None,
        }
    }

    /// Check a `type` value reported by the index against this hash type.
    pub fn matches(&self, reported: &str) -> bool {
        reported.eq_ignore_ascii_case(&self.to_string())
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashType::Md5 => write!(f, "MD5"),
            HashType::Sha1 => write!(f, "SHA1"),
            HashType::Sha256 => write!(f, "SHA256"),
        }
    }
}

impl FromStr for HashType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashType::Md5),
            "sha1" | "sha-1" => Ok(HashType::Sha1),
            "sha256" | "sha-256" => Ok(HashType::Sha256),
            _ => Err(format!("Unknown hash type: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for HashType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
