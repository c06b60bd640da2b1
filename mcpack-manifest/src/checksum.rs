//! Content hashing for pack files
//!
//! Files are streamed through the digest so arbitrarily large jars and
//! resource packs never need to fit in memory.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

const CHUNK_SIZE: usize = 65536;

/// Compute the SHA256 hash of a file as lowercase hex
pub fn sha256sum<P: AsRef<Path>>(path: P) -> std::io::Result<String> {
    let file = File::open(path)?;
    sha256_reader(BufReader::new(file))
}

/// Compute the SHA256 hash of everything a reader yields
pub fn sha256_reader<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = Sha256::new();

    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
