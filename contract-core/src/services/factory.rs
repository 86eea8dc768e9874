//! Backend selection.
//!
//! Host applications decide at startup which [`ContractBackend`] they run
//! against: they register one [`ServiceFactory`] per backend they ship with
//! and resolve the one named in their [`BackendConfig`]. The engine itself
//! never looks at the configuration; it only ever sees the resolved backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::backend::{ContractBackend, ServiceError};

/// Which backend to connect to, and how.
///
/// The in-memory backend ignores `connection_string`; a remote backend would
/// read its endpoint from it. Defaults target `"memory"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub backend: String,
    pub connection_string: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            connection_string: String::new(),
        }
    }
}

/// Constructor for one kind of [`ContractBackend`].
///
/// Backend crates export a unit struct implementing this and leave the
/// wiring to the host.
#[async_trait]
pub trait ServiceFactory: Send + Sync {
    /// Lowercase name under which [`ServiceRegistry`] resolves this factory.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use backend for `config`. Connection setup and
    /// fixture loading belong here, not in the backend's methods.
    async fn create(
        &self,
        config: &BackendConfig,
    ) -> Result<Box<dyn ContractBackend>, ServiceError>;
}

/// The set of backends a host knows how to construct, keyed by name.
#[derive(Default)]
pub struct ServiceRegistry {
    factories: HashMap<&'static str, Box<dyn ServiceFactory>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factory. A later registration under the same name wins.
    pub fn register(&mut self, factory: Box<dyn ServiceFactory>) {
        let name = factory.backend_name();
        debug!(backend = name, "backend factory registered");
        self.factories.insert(name, factory);
    }

    /// Registered backend names, sorted so error messages stay stable.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Resolve `config.backend` and let the matching factory build the
    /// backend. An unknown name is a [`ServiceError::Configuration`] naming
    /// the alternatives; whatever the factory itself returns passes through
    /// untouched.
    pub async fn create(
        &self,
        config: &BackendConfig,
    ) -> Result<Box<dyn ContractBackend>, ServiceError> {
        match self.factories.get(config.backend.as_str()) {
            Some(factory) => factory.create(config).await,
            None => {
                warn!(backend = %config.backend, "no factory for requested backend");
                Err(ServiceError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                )))
            }
        }
    }
}
