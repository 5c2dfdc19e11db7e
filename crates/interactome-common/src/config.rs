//! Configuration loading for Interactome.
//! Reads interactome.toml from the current directory or the path in the
//! INTERACTOME_CONFIG env var. A missing file falls back to defaults, so the
//! server can run from environment variables alone.

use std::path::Path;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub biogrid: BiogridConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 30 }

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: default_timeout_secs() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiogridConfig {
    /// Name of the environment variable holding the BioGRID access key.
    /// The key itself never appears in the config file or in source.
    #[serde(default = "default_access_key_env")]
    pub access_key_env: String,
}

fn default_access_key_env() -> String { "BIOGRID_ACCESS_KEY".to_string() }

impl Default for BiogridConfig {
    fn default() -> Self {
        Self { access_key_env: default_access_key_env() }
    }
}

impl Config {
    /// Load configuration from interactome.toml.
    /// Checks INTERACTOME_CONFIG first, then the current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("INTERACTOME_CONFIG")
            .unwrap_or_else(|_| "interactome.toml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the BioGRID access key from the environment.
    /// Returns None when the variable is unset or empty — the server still
    /// starts, but BioGRID queries report a configuration error.
    pub fn biogrid_access_key(&self) -> Option<SecretString> {
        match std::env::var(&self.biogrid.access_key_env) {
            Ok(key) if !key.trim().is_empty() => Some(SecretString::from(key)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.biogrid.access_key_env, "BIOGRID_ACCESS_KEY");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn access_key_read_from_named_env_var() {
        let config: Config = toml::from_str(
            r#"
            [biogrid]
            access_key_env = "INTERACTOME_TEST_BIOGRID_KEY"
            "#,
        )
        .unwrap();

        std::env::remove_var("INTERACTOME_TEST_BIOGRID_KEY");
        assert!(config.biogrid_access_key().is_none());

        std::env::set_var("INTERACTOME_TEST_BIOGRID_KEY", "abc123");
        assert!(config.biogrid_access_key().is_some());
        std::env::remove_var("INTERACTOME_TEST_BIOGRID_KEY");
    }
}
