//! Process-wide data-source selection.
//!
//! [`DataContext`] is an explicit dependency-injection object: constructed
//! once at application start, threaded to every data-access call site,
//! never reached through ambient globals.
//! It owns both providers and the current selection; switching persists the
//! choice through [`SettingsManager`] but triggers no re-fetch. Each view
//! re-queries on its own mount/refresh cycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::adapters::{GeneratorSource, RemoteSource, ReqwestHttpClient};
use crate::generator::DEFAULT_SEED;
use crate::settings::{Settings, SettingsManager};
use crate::traits::DataSource;

/// Which provider the dashboard reads from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    /// Seeded synthetic data, nothing persisted.
    #[default]
    Demo,
    /// The real persistence backend over HTTP.
    Live,
}

impl DataSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceKind::Demo => "demo",
            DataSourceKind::Live => "live",
        }
    }
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The selection plus both providers, shared by every consumer.
pub struct DataContext {
    selection: RwLock<DataSourceKind>,
    demo: Arc<dyn DataSource>,
    live: Arc<dyn DataSource>,
    settings: Option<SettingsManager>,
}

impl DataContext {
    /// Build a context from explicit providers, restoring the persisted
    /// selection.
    ///
    /// `settings` is optional so tests and one-off tools can run without a
    /// home directory; selection changes are then process-local.
    pub fn new(
        demo: Arc<dyn DataSource>,
        live: Arc<dyn DataSource>,
        settings: Option<SettingsManager>,
    ) -> Self {
        let selection = settings
            .as_ref()
            .map(|manager| manager.load().data_source)
            .unwrap_or_default();
        Self {
            selection: RwLock::new(selection),
            demo,
            live,
            settings,
        }
    }

    /// The standard wiring: seeded generator for demo mode, reqwest-backed
    /// remote source against `base_url` for live mode.
    pub fn with_defaults(base_url: impl Into<String>) -> Self {
        Self::new(
            Arc::new(GeneratorSource::new(DEFAULT_SEED)),
            Arc::new(RemoteSource::new(ReqwestHttpClient::new(), base_url)),
            SettingsManager::new(),
        )
    }

    /// The currently selected provider kind.
    pub fn kind(&self) -> DataSourceKind {
        *self
            .selection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// The currently selected provider.
    pub fn source(&self) -> Arc<dyn DataSource> {
        match self.kind() {
            DataSourceKind::Demo => Arc::clone(&self.demo),
            DataSourceKind::Live => Arc::clone(&self.live),
        }
    }

    /// Switch providers and persist the choice.
    ///
    /// Already-rendered views are not refreshed; consumers observe the new
    /// selection on their next query.
    pub fn switch(&self, kind: DataSourceKind) {
        *self
            .selection
            .write()
            .unwrap_or_else(PoisonError::into_inner) = kind;

        if let Some(manager) = &self.settings {
            let saved = manager.save(&Settings { data_source: kind });
            if !saved {
                tracing::warn!(%kind, "failed to persist data source selection");
            }
        }
    }
}
