// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ConnectionConfig,
}

/// Connection parameters for the Sensu API, fixed for the lifetime of the
/// process once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upgrade the connection to HTTPS. Peer certificates are NOT
    /// verified on this path.
    #[serde(default)]
    pub ssl: bool,

    /// Basic-auth user. Auth is sent only when both `user` and
    /// `password` are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Basic-auth password. Supports `${VAR}` environment references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Read timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Connect timeout in seconds.
    #[serde(default = "default_open_timeout")]
    pub open_timeout: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            ssl: false,
            user: None,
            password: None,
            timeout: default_timeout(),
            open_timeout: default_open_timeout(),
        }
    }
}

impl ConnectionConfig {
    pub fn base_url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.host, self.port)
    }

    /// Full URL for an API path. The path is taken verbatim.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4567
}

fn default_timeout() -> u64 {
    15
}

fn default_open_timeout() -> u64 {
    5
}

impl Config {
    /// Load configuration from an explicit path, or from the default
    /// location when none is given. A missing default file yields the
    /// built-in defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::read(p)?,
            None => match default_config_path() {
                Some(p) if p.exists() => Self::read(&p)?,
                _ => Config::default(),
            },
        };

        config.api.user = normalize_credential(config.api.user.take());
        config.api.password = normalize_credential(config.api.password.take());

        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sabi").join("config.toml"))
}

/// Resolve `${VAR}` references, then treat an empty value as unset.
fn normalize_credential(value: Option<String>) -> Option<String> {
    let resolved = resolve_env_vars(&value?);
    if resolved.is_empty() {
        None
    } else {
        Some(resolved)
    }
}

/// Resolve ${VAR} references to environment variables
fn resolve_env_vars(value: &str) -> String {
    let mut result = value.to_string();

    // Match ${VAR_NAME} pattern
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    for cap in re.captures_iter(value) {
        let var_name = &cap[1];
        let full_match = &cap[0];

        if let Ok(env_value) = std::env::var(var_name) {
            result = result.replace(full_match, &env_value);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 4567);
        assert!(!config.api.ssl);
        assert_eq!(config.api.timeout, 15);
        assert_eq!(config.api.open_timeout, 5);
    }

    #[test]
    fn test_base_url_scheme_follows_ssl() {
        let mut api = ConnectionConfig::default();
        assert_eq!(api.base_url(), "http://127.0.0.1:4567");

        api.ssl = true;
        api.host = "sensu.example".to_string();
        api.port = 4568;
        assert_eq!(api.url_for("/clients"), "https://sensu.example:4568/clients");
    }

    #[test]
    fn test_parse_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[api]\nhost = \"sensu.example\"\n").unwrap();
        assert_eq!(config.api.host, "sensu.example");
        assert_eq!(config.api.port, 4567);
        assert_eq!(config.api.timeout, 15);
    }

    #[test]
    fn test_resolve_env_vars() {
        std::env::set_var("SABI_TEST_VAR", "hunter2");
        let result = resolve_env_vars("${SABI_TEST_VAR}");
        assert_eq!(result, "hunter2");
        std::env::remove_var("SABI_TEST_VAR");
    }

    #[test]
    fn test_empty_credential_is_unset() {
        assert_eq!(normalize_credential(Some(String::new())), None);
        assert_eq!(normalize_credential(None), None);
        assert_eq!(
            normalize_credential(Some("admin".to_string())),
            Some("admin".to_string())
        );
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[api]\nhost = \"sensu.example\"\nuser = \"admin\"\npassword = \"\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api.host, "sensu.example");
        assert_eq!(config.api.user, Some("admin".to_string()));
        // An empty password collapses to no credentials at send time.
        assert_eq!(config.api.password, None);
    }

    #[test]
    fn test_load_missing_explicit_file_errors() {
        let err = Config::load(Some(Path::new("/nonexistent/sabi.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
