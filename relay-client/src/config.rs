// relay-client/src/config.rs
use directories::BaseDirs;
use relay_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const ENV_API_KEY: &str = "RELAYCTL_KEY";
pub const ENV_BASE_URL: &str = "RELAYCTL_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key provided.\nUse --key <API_KEY> or set the RELAYCTL_KEY environment variable")]
    MissingApiKey,
    #[error("timeout must be at least one second")]
    ZeroTimeout,
    #[error("cannot determine config directory")]
    MissingConfigDir,
    #[error("reading {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parsing {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Optional settings file (`<config dir>/relayctl/config.toml`).
///
/// The CLI only reads it; nothing is ever written back.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Values supplied on the command line. They win over everything else.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

/// Fully resolved connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// File (if present) overlaid with environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::config_path() {
            Ok(path) => Self::load_from(&path)?,
            Err(ConfigError::MissingConfigDir) => Self::default(),
            Err(e) => return Err(e),
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let base_dirs = BaseDirs::new().ok_or(ConfigError::MissingConfigDir)?;
        Ok(base_dirs.config_dir().join("relayctl").join("config.toml"))
    }

    /// Overlay environment values; empty variables are ignored
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(url) = non_empty(ENV_BASE_URL) {
            self.base_url = Some(url);
        }
        self
    }

    pub fn resolve(self, overrides: Overrides) -> Result<Settings, ConfigError> {
        let api_key = overrides
            .api_key
            .or(self.api_key)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = overrides
            .base_url
            .or(self.base_url)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = overrides
            .timeout
            .or(self.timeout_secs.map(Duration::from_secs))
            .unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Settings {
            api_key,
            base_url,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_env_and_flag_precedence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "api_key = \"file-key\"\nbase_url = \"https://file.example\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let file_only = Config::load_from(&path).unwrap();
        let settings = file_only.clone().resolve(Overrides::default()).unwrap();
        assert_eq!(settings.api_key, "file-key");
        assert_eq!(settings.base_url, "https://file.example");
        assert_eq!(settings.timeout, Duration::from_secs(5));

        let with_env = file_only.with_env(env(&[(ENV_API_KEY, "env-key")]));
        let settings = with_env.clone().resolve(Overrides::default()).unwrap();
        assert_eq!(settings.api_key, "env-key");
        assert_eq!(settings.base_url, "https://file.example");

        let settings = with_env
            .resolve(Overrides {
                api_key: Some("flag-key".into()),
                base_url: Some("https://flag.example".into()),
                timeout: Some(Duration::from_secs(60)),
            })
            .unwrap();
        assert_eq!(settings.api_key, "flag-key");
        assert_eq!(settings.base_url, "https://flag.example");
        assert_eq!(settings.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_zero_timeout_in_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_key = \"file-key\"\ntimeout_secs = 0\n").unwrap();

        let err = Config::load_from(&path)
            .unwrap()
            .resolve(Overrides::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));

        // A flag still wins over the bad file value
        let settings = Config::load_from(&path)
            .unwrap()
            .resolve(Overrides {
                timeout: Some(Duration::from_secs(10)),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(settings.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_defaults_apply() {
        let settings = Config::default()
            .with_env(env(&[(ENV_API_KEY, "  padded  "), (ENV_BASE_URL, "")]))
            .resolve(Overrides::default())
            .unwrap();
        assert_eq!(settings.api_key, "padded");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = Config::default()
            .with_env(env(&[]))
            .resolve(Overrides::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert!(err.to_string().contains(ENV_API_KEY));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_key = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
