//! mcpack-manifest: manifest generator for Minecraft mod packs
//!
//! This crate provides:
//! - Loading the generator config (`manifest_config.json`)
//! - Scanning the pack's mods, resource packs, shader packs and config files
//! - Streaming SHA256 hashing of every pack file
//! - Writing the `manifest.json` launchers consume

pub mod checksum;
pub mod config;
pub mod error;
pub mod manifest;
pub mod scan;

use std::path::PathBuf;

pub use config::ManifestConfig;
pub use error::{Error, Result};
pub use manifest::{FileEntry, Manifest, ModLoader};
pub use scan::{scan_files, ScanProgress, SCAN_DIRS};

/// Scan the pack directory, then build and write its manifest.
///
/// Nothing is written unless every file was scanned successfully.
pub fn generate<F>(config: &ManifestConfig, on_progress: F) -> Result<(Manifest, PathBuf)>
where
    F: FnMut(&ScanProgress),
{
    let files = scan_files(&config.dir, &config.base_url, on_progress)?;
    let manifest = Manifest::new(config, files);
    let output_path = manifest.write(&config.dir)?;
    Ok((manifest, output_path))
}
