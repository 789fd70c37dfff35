use crate::error::{Result, StorefrontError};
use crate::state::session::SessionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for the storefront binary, read from YAML.
///
/// Every key is optional; missing keys keep the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub max_matches: usize,
    pub max_visible: usize,
    pub poll_interval_ms: u64,
    pub catalog: Option<PathBuf>,
    /// Seconds between catalog file checks; unset disables reloading.
    pub refresh_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            max_matches: 6,
            max_visible: 6,
            poll_interval_ms: 120,
            catalog: None,
            refresh_secs: None,
        }
    }
}

impl SearchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| StorefrontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&raw).map_err(|source| StorefrontError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        if let (Some(catalog), Some(base)) = (config.catalog.as_ref(), path.parent())
            && catalog.is_relative()
        {
            config.catalog = Some(base.join(catalog));
        }
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    pub fn quiet_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            quiet_window: self.quiet_window(),
            max_matches: self.max_matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchConfig;
    use crate::error::StorefrontError;
    use std::time::Duration;

    #[test]
    fn missing_keys_keep_defaults() {
        let config = SearchConfig::from_yaml("max_visible: 4\n").expect("parse");
        assert_eq!(config.max_visible, 4);
        assert_eq!(config.debounce_ms, 200);
        assert_eq!(config.max_matches, 6);
        assert_eq!(config.refresh_interval(), None);
        assert_eq!(SearchConfig::from_yaml("").expect("empty"), SearchConfig::default());
    }

    #[test]
    fn session_config_uses_window_and_cap() {
        let config = SearchConfig::from_yaml("debounce_ms: 75\nmax_matches: 3\n").expect("parse");
        let session = config.session_config();
        assert_eq!(session.quiet_window, Duration::from_millis(75));
        assert_eq!(session.max_matches, 3);
    }

    #[test]
    fn load_resolves_catalog_next_to_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storefront.yaml");
        std::fs::write(&path, "catalog: items.json\nrefresh_secs: 5\n").expect("write config");

        let config = SearchConfig::load(&path).expect("load");
        assert_eq!(config.catalog, Some(dir.path().join("items.json")));
        assert_eq!(config.refresh_interval(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "debounce_ms: [not, a, number]\n").expect("write config");

        let err = SearchConfig::load(&path).expect_err("should fail");
        assert!(matches!(err, StorefrontError::ConfigParse { .. }));
        assert!(err.to_string().contains("broken.yaml"));
    }
}
