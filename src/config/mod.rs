pub mod schema;

pub use schema::BookdbConfig;

use crate::catalog::{self, Catalog};
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default bookdb home directory (~/.bookdb).
pub fn default_home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().join(".bookdb"))
        .unwrap_or_else(|| PathBuf::from(".bookdb"))
}

/// Default config file location (~/.bookdb/bookdb.toml).
pub fn default_config_path() -> PathBuf {
    default_home_dir().join("bookdb.toml")
}

/// Parse config text. Keys the schema does not know are ignored.
pub fn parse_config(contents: &str) -> Result<BookdbConfig> {
    toml::from_str(contents).context("Invalid bookdb config (TOML)")
}

/// Load config from `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<BookdbConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            parse_config(&contents).with_context(|| format!("In config file {}", path.display()))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No config at {}; using defaults", path.display());
            Ok(BookdbConfig::default())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read config {}", path.display())),
    }
}

/// Write `config` to `path` as TOML, creating parent directories.
pub fn save_config(config: &BookdbConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    info!("Saved config to {}", path.display());
    Ok(())
}

/// Build the catalog the config points at.
pub fn open_catalog(config: &BookdbConfig) -> Result<Catalog> {
    match config.resolved_catalog_path() {
        Some(path) => catalog::load_catalog(Path::new(&path))
            .with_context(|| format!("Failed to load catalog from {}", path)),
        None => {
            info!("Using built-in reference catalog");
            Ok(Catalog::reference())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MultiCallPolicy;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let cfg = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, BookdbConfig::default());
        assert_eq!(cfg.multi_call_policy, MultiCallPolicy::First);
    }

    #[test]
    fn save_then_load_preserves_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("bookdb.toml");
        let cfg = BookdbConfig {
            catalog_path: "/srv/books.yaml".into(),
            multi_call_policy: MultiCallPolicy::Fail,
            ..BookdbConfig::default()
        };

        save_config(&cfg, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookdb.toml");
        std::fs::write(&path, "multi_call_policy = \"fail\"\n").unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.multi_call_policy, MultiCallPolicy::Fail);
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.resolved_catalog_path().is_none());
    }

    #[test]
    fn invalid_policy_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookdb.toml");
        std::fs::write(&path, "multi_call_policy = \"all\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn open_catalog_reads_configured_file() {
        let dir = tempdir().unwrap();
        let books = dir.path().join("books.json");
        std::fs::write(
            &books,
            r#"[{"id":"k1","name":"Kafka on the Shore","genre":"magical realism","description":""}]"#,
        )
        .unwrap();

        let cfg = BookdbConfig {
            catalog_path: books.display().to_string(),
            ..BookdbConfig::default()
        };
        let catalog = open_catalog(&cfg).unwrap();
        assert_eq!(catalog.len(), 1);

        assert_eq!(open_catalog(&BookdbConfig::default()).unwrap().len(), 3);
    }

    #[test]
    fn legacy_keys_are_ignored() {
        let cfg = parse_config("name = \"old shelf\"\nversion = 1\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.catalog_path, "");
    }

    #[test]
    fn saved_file_has_only_live_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookdb.toml");
        save_config(&BookdbConfig::default(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("multi_call_policy = \"first\""));
        assert!(!text.contains("version"));
        assert!(!text.contains("name"));
    }

    #[test]
    fn default_config_lives_under_home_dir() {
        let path = default_config_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("bookdb.toml"));
        assert_eq!(path.parent(), Some(default_home_dir().as_path()));
    }
}
