//! Generator configuration
//!
//! Loaded once from a JSON file before anything is scanned.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "manifest_config.json";

pub const DEFAULT_LOADER_TYPE: &str = "vanilla";
pub const DEFAULT_JAVA_ARGS: &str = "-Xmx4G -Xms2G";

/// Config file as written on disk, before required fields are checked
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    dir: Option<PathBuf>,
    base_url: Option<String>,
    mc_version: Option<String>,
    loader_type: Option<String>,
    loader_version: Option<String>,
    java_args: Option<String>,
    server_address: Option<String>,
}

/// Validated generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Pack directory to scan and write the manifest into
    pub dir: PathBuf,
    /// Prefix for download URLs
    pub base_url: String,
    pub mc_version: String,
    pub loader_type: String,
    pub loader_version: String,
    pub java_args: String,
    /// `None` when the key is absent or empty
    pub server_address: Option<String>,
}

impl ManifestConfig {
    /// Load and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate config JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(content)?;

        let dir = raw.dir.ok_or(Error::ConfigMissingField("dir"))?;
        let base_url = raw.base_url.ok_or(Error::ConfigMissingField("base_url"))?;
        let mc_version = raw
            .mc_version
            .ok_or(Error::ConfigMissingField("mc_version"))?;

        Ok(Self {
            dir,
            base_url,
            mc_version,
            loader_type: raw
                .loader_type
                .unwrap_or_else(|| DEFAULT_LOADER_TYPE.to_string()),
            loader_version: raw.loader_version.unwrap_or_default(),
            java_args: raw
                .java_args
                .unwrap_or_else(|| DEFAULT_JAVA_ARGS.to_string()),
            server_address: raw.server_address.filter(|s| !s.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_defaults() {
        let json = r#"{
            "dir": "pack",
            "base_url": "http://example.com/pack",
            "mc_version": "1.20.1"
        }"#;
        let config = ManifestConfig::from_json(json).unwrap();
        assert_eq!(config.dir, PathBuf::from("pack"));
        assert_eq!(config.base_url, "http://example.com/pack");
        assert_eq!(config.mc_version, "1.20.1");
        assert_eq!(config.loader_type, "vanilla");
        assert_eq!(config.loader_version, "");
        assert_eq!(config.java_args, "-Xmx4G -Xms2G");
        assert_eq!(config.server_address, None);
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "dir": "/srv/pack",
            "base_url": "https://cdn.example.com/",
            "mc_version": "1.21",
            "loader_type": "fabric",
            "loader_version": "0.15.11",
            "java_args": "-Xmx8G",
            "server_address": "play.example.com:25565",
            "comment": "ignored"
        }"#;
        let config = ManifestConfig::from_json(json).unwrap();
        assert_eq!(config.loader_type, "fabric");
        assert_eq!(config.loader_version, "0.15.11");
        assert_eq!(config.java_args, "-Xmx8G");
        assert_eq!(
            config.server_address,
            Some("play.example.com:25565".to_string())
        );
    }

    #[test]
    fn test_empty_server_address_is_absent() {
        let json = r#"{"dir": "d", "base_url": "u", "mc_version": "v", "server_address": ""}"#;
        let config = ManifestConfig::from_json(json).unwrap();
        assert_eq!(config.server_address, None);
    }

    #[test]
    fn test_null_optional_uses_default() {
        let json = r#"{"dir": "d", "base_url": "u", "mc_version": "v", "loader_type": null}"#;
        let config = ManifestConfig::from_json(json).unwrap();
        assert_eq!(config.loader_type, "vanilla");
    }

    #[test]
    fn test_missing_required_fields() {
        let cases = [
            (r#"{"base_url": "u", "mc_version": "v"}"#, "dir"),
            (r#"{"dir": "d", "mc_version": "v"}"#, "base_url"),
            (r#"{"dir": "d", "base_url": "u"}"#, "mc_version"),
            // Reported in declaration order
            (r#"{}"#, "dir"),
        ];
        for (json, expected) in cases {
            match ManifestConfig::from_json(json) {
                Err(Error::ConfigMissingField(field)) => assert_eq!(field, expected),
                other => panic!("expected missing '{}', got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ManifestConfig::from_json("{not json"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            ManifestConfig::from_json(r#"{"dir": "d", "base_url": 5, "mc_version": "v"}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest_config.json");
        match ManifestConfig::load(&path) {
            Err(Error::ConfigNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(
            &path,
            r#"{"dir": "pack", "base_url": "http://h", "mc_version": "1.19.2"}"#,
        )
        .unwrap();
        let config = ManifestConfig::load(&path).unwrap();
        assert_eq!(config.mc_version, "1.19.2");
    }
}
