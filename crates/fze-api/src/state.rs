//! # Application State
//!
//! Shared state for the Axum application: the estimator (catalog snapshot
//! plus fee schedule) and the catalog digest computed once at startup.
//! Nothing in the state is mutable; handlers only read it.

use std::path::PathBuf;
use std::sync::Arc;

use fze_catalog::{Catalog, CatalogError};
use fze_engine::{ConfigError, Estimator, FeeSchedule};
use thiserror::Error;

/// Errors assembling the application state at startup.
#[derive(Error, Debug)]
pub enum StartupError {
    /// Catalog file could not be loaded or digested.
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Fee schedule could not be loaded.
    #[error("fee schedule: {0}")]
    Config(#[from] ConfigError),
}

/// Application configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Catalog file; the built-in catalog is used when absent.
    pub catalog_path: Option<PathBuf>,
    /// Fee schedule file; defaults apply when absent.
    pub fee_schedule_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            catalog_path: None,
            fee_schedule_path: None,
        }
    }
}

impl AppConfig {
    /// Build the configuration from `PORT`, `CATALOG_PATH` and
    /// `FEE_SCHEDULE_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from a variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |var: &str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };
        Self {
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(8080),
            catalog_path: path("CATALOG_PATH"),
            fee_schedule_path: path("FEE_SCHEDULE_PATH"),
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog snapshot and fee schedule.
    pub estimator: Estimator,
    /// SHA-256 digest of the catalog snapshot.
    pub catalog_digest: Arc<str>,
}

impl AppState {
    /// Create state over a catalog and fee schedule.
    pub fn new(catalog: Catalog, schedule: FeeSchedule) -> Result<Self, CatalogError> {
        let catalog_digest: Arc<str> = catalog.digest()?.into();
        Ok(Self {
            estimator: Estimator::new(Arc::new(catalog), schedule),
            catalog_digest,
        })
    }

    /// State over the built-in catalog and default fees.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(Catalog::builtin(), FeeSchedule::default())
    }

    /// Load the catalog and fee schedule named by `config`.
    pub fn bootstrap(config: &AppConfig) -> Result<Self, StartupError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => {
                tracing::info!("CATALOG_PATH not set; using built-in catalog");
                Catalog::builtin()
            }
        };
        let schedule = FeeSchedule::resolve(config.fee_schedule_path.as_deref())?;
        let state = Self::new(catalog, schedule)?;
        tracing::info!(
            packages = state.estimator.catalog().package_count(),
            activities = state.estimator.catalog().activity_count(),
            digest = %state.catalog_digest,
            currency = %state.estimator.schedule().currency,
            "catalog ready"
        );
        Ok(state)
    }
}
