//! Configuration parsing – reads a KEY=VALUE file (`snaploop.conf`).
//!
//! Only the server reads it; the hydrated client never sees these values.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SNAPLOOP_CONFIG";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Local directory served under `/media`, if any.
    pub media_dir: Option<PathBuf>,
    /// Serve the content snapshot at `/api/content.json`.
    pub content_api: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "snaploop_web=info,tower_http=info".into(),
            media_dir: None,
            content_api: true,
        }
    }
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/snaploop/snaploop.conf"
    }

    /// Path from `SNAPLOOP_CONFIG`, or [`Config::default_path`].
    pub fn resolve_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::default_path()))
    }
}

/// Load the config at `path`, falling back to defaults when the file does
/// not exist. Any other read error is returned.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if !path.exists() {
        warn!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load(path)
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;

    let config = from_map(&parse_conf(&text));
    info!("Loaded config from {}", path.display());
    Ok(config)
}

fn from_map(map: &HashMap<String, String>) -> Config {
    let defaults = Config::default();
    let get = |key: &str| -> Option<String> { map.get(key).cloned().filter(|s| !s.is_empty()) };

    Config {
        log_filter: get("LOG_FILTER").unwrap_or(defaults.log_filter),
        media_dir: get("MEDIA_DIR").map(PathBuf::from),
        content_api: get("CONTENT_API")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.content_api),
    }
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conf() {
        let text = r#"
# comment
LOG_FILTER="snaploop_web=debug"
MEDIA_DIR=/srv/media
CONTENT_API=0
UNKNOWN_KEY=ignored
"#;
        let map = parse_conf(text);
        assert_eq!(map["LOG_FILTER"], "snaploop_web=debug");
        assert_eq!(map["MEDIA_DIR"], "/srv/media");

        let config = from_map(&map);
        assert_eq!(config.media_dir, Some(PathBuf::from("/srv/media")));
        assert!(!config.content_api);
    }

    #[test]
    fn test_empty_values_keep_defaults() {
        let config = from_map(&parse_conf("LOG_FILTER=\"\"\nMEDIA_DIR=\n"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile("CONTENT_API=true\nMEDIA_DIR=/tmp/media\n");
        let config = load(tmp.as_path()).unwrap();
        assert!(config.content_api);
        assert_eq!(config.media_dir, Some(PathBuf::from("/tmp/media")));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("snaploop_test_missing/none.conf");
        assert_eq!(load_or_default(&path).unwrap(), Config::default());
        assert!(load(&path).is_err());
    }

    fn tempfile(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("snaploop_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.conf");
        std::fs::write(&path, content).unwrap();
        path
    }
}
