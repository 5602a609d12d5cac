//! File hashing for duplicate lookups.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::config::HashType;
use crate::error::Result;

/// Read buffer size for streaming digests.
const HASH_BUFFER_SIZE: usize = 64 * 1024;

/// Compute the hex digest of a file.
pub fn hash_file(path: &Path, hash_type: HashType) -> Result<String> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(HASH_BUFFER_SIZE, file);
    let hash = hash_reader(reader, hash_type)?;

    tracing::debug!("{} of {}: {}", hash_type, path.display(), hash);
    Ok(hash)
}

/// Compute the hex digest of everything readable from `reader`.
pub fn hash_reader<R: Read>(reader: R, hash_type: HashType) -> Result<String> {
    match hash_type {
        HashType::Md5 => digest_stream::<Md5, _>(reader),
        HashType::Sha1 => digest_stream::<Sha1, _>(reader),
        HashType::Sha256 => digest_stream::<Sha256, _>(reader),
    }
}

fn digest_stream<D: Digest, R: Read>(mut reader: R) -> Result<String> {
    let mut hasher = D::new();
    let mut buffer = vec![0u8; HASH_BUFFER_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let result = hasher.finalize();
    Ok(result.iter().map(|b| format!("{:02x}", b)).collect())
}
