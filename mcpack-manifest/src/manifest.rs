//! Pack manifest document
//!
//! The manifest is what launchers download to learn which files a pack
//! needs and where to fetch them from. Field order here is the key order
//! in the written JSON.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ManifestConfig;
use crate::Result;

/// Name of the generated file inside the pack directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// A single downloadable pack file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// `/`-separated path relative to the pack directory
    pub path: String,
    pub sha256: String,
    pub url: String,
    pub size: u64,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModLoader {
    #[serde(rename = "type")]
    pub loader_type: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub mc_version: String,
    pub mod_loader: ModLoader,
    pub files: Vec<FileEntry>,
    pub java_args: String,
    pub server_address: Option<String>,
}

impl Manifest {
    /// Build a manifest from the config metadata and scanned files.
    ///
    /// Files are sorted by path so the output does not depend on
    /// filesystem listing order.
    pub fn new(config: &ManifestConfig, mut files: Vec<FileEntry>) -> Self {
        files.sort_by(|a, b| a.path.cmp(&b.path));

        Self {
            mc_version: config.mc_version.clone(),
            mod_loader: ModLoader {
                loader_type: config.loader_type.clone(),
                version: config.loader_version.clone(),
            },
            files,
            java_args: config.java_args.clone(),
            server_address: config.server_address.clone(),
        }
    }

    /// Serialize with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write `manifest.json` into `dir`, replacing any existing one.
    ///
    /// Returns the path written.
    pub fn write<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let output_path = dir.join(MANIFEST_FILE);
        let mut writer = BufWriter::new(File::create(&output_path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;

        info!(
            "Wrote manifest with {} files -> {}",
            self.files.len(),
            output_path.display()
        );
        Ok(output_path)
    }
}
