//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use interactome_common::config::Config;
use interactome_common::error::{InteractomeError, Result};
use interactome_common::sandbox::SandboxClient;
use interactome_sources::sources::{BioGridClient, PpiSource, SourceKind, StringClient};

/// Shared state injected into every Axum handler.
///
/// Holds the configuration and one client per PPI database. No per-query
/// state lives here: each query is a pure function of its inputs.
pub struct AppState {
    pub config: Config,
    biogrid: Option<BioGridClient>,
    string_db: StringClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let client = SandboxClient::new(Duration::from_secs(config.http.timeout_secs))?;

        // BioGRID needs the externally supplied access key; without it the
        // server still runs and STRING remains usable.
        let biogrid = config
            .biogrid_access_key()
            .map(|key| BioGridClient::new(client.clone(), key));

        let string_db = StringClient::new(client);

        Ok(Self {
            config,
            biogrid,
            string_db,
        })
    }

    pub fn has_biogrid(&self) -> bool {
        self.biogrid.is_some()
    }

    /// Resolve the adapter for a database selection.
    pub fn source(&self, kind: SourceKind) -> Result<&dyn PpiSource> {
        match kind {
            SourceKind::BioGrid => self
                .biogrid
                .as_ref()
                .map(|c| c as &dyn PpiSource)
                .ok_or_else(|| {
                    InteractomeError::Config(format!(
                        "BioGRID access key not configured; set the {} environment variable",
                        self.config.biogrid.access_key_env
                    ))
                }),
            SourceKind::String => Ok(&self.string_db as &dyn PpiSource),
        }
    }
}

pub type SharedState = Arc<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_source_always_available() {
        let state = AppState::new(Config::default()).unwrap();
        assert!(state.source(SourceKind::String).is_ok());
    }

    #[test]
    fn biogrid_without_key_is_config_error() {
        let mut config = Config::default();
        // Point at a variable that is guaranteed unset.
        config.biogrid.access_key_env = "INTERACTOME_TEST_UNSET_KEY".to_string();
        std::env::remove_var("INTERACTOME_TEST_UNSET_KEY");

        let state = AppState::new(config).unwrap();
        assert!(!state.has_biogrid());
        let err = state.source(SourceKind::BioGrid).unwrap_err();
        assert!(matches!(err, InteractomeError::Config(_)));
    }
}
