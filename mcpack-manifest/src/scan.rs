//! Pack directory scanning
//!
//! Walks the fixed set of pack subdirectories and turns every file found
//! into a [`FileEntry`].

use std::fmt;
use std::path::{Component, Path};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::checksum::sha256sum;
use crate::manifest::FileEntry;
use crate::{Error, Result};

/// Subdirectories of the pack directory that end up in the manifest, in scan order
pub const SCAN_DIRS: [&str; 4] = ["mods", "resourcepacks", "shaderpacks", "config"];

/// Progress event emitted once per scanned file
#[derive(Debug, Clone, Copy)]
pub struct ScanProgress<'a> {
    pub scan_dir: &'a str,
    pub file_name: &'a str,
    pub size: u64,
}

impl fmt::Display for ScanProgress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  [{}] {} ({} bytes)",
            self.scan_dir,
            self.file_name,
            format_thousands(self.size)
        )
    }
}

/// Format an integer with `,` between groups of three digits
fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Path of `path` relative to `base`, always `/`-separated.
///
/// Fails on components that are not valid UTF-8, since the manifest could
/// not name such a file.
pub fn relative_url_path(base: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(base).unwrap_or(path);
    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part
                .to_str()
                .ok_or_else(|| Error::NonUtf8Path(path.to_path_buf()))?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}

/// Join a relative path onto the base URL with exactly one `/` between them
pub fn join_url(base_url: &str, relative_path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), relative_path)
}

/// Scan every existing directory in [`SCAN_DIRS`] beneath `base_dir`.
///
/// Missing scan directories are skipped. Any file that cannot be read
/// aborts the scan, since the manifest would otherwise silently omit it.
pub fn scan_files<F>(
    base_dir: &Path,
    base_url: &str,
    mut on_progress: F,
) -> Result<Vec<FileEntry>>
where
    F: FnMut(&ScanProgress),
{
    let mut files = Vec::new();

    for scan_dir in SCAN_DIRS {
        let full_dir = base_dir.join(scan_dir);
        if !full_dir.is_dir() {
            info!("Skipping {}: not present", full_dir.display());
            continue;
        }

        for entry in WalkDir::new(&full_dir).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            // Follows symlinks; a dangling link fails here
            let metadata = std::fs::metadata(path)?;
            if metadata.is_dir() {
                debug!("Not descending into linked directory {}", path.display());
                continue;
            }

            let size = metadata.len();
            let rel_path = relative_url_path(base_dir, path)?;
            let sha256 = sha256sum(path)?;
            let url = join_url(base_url, &rel_path);
            debug!("{} sha256={}", rel_path, sha256);

            on_progress(&ScanProgress {
                scan_dir,
                file_name: rel_path.rsplit('/').next().unwrap_or(&rel_path),
                size,
            });

            files.push(FileEntry {
                path: rel_path,
                sha256,
                url,
                size,
                required: true,
            });
        }
    }

    Ok(files)
}
