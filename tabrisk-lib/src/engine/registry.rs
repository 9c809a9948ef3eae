use crate::Result;
use crate::metrics::MetricPlugin;
use crate::plugins::{PluginUnit, hooks};
use core::fmt::{Debug, Formatter};
use ohno::EnrichableExt;
use std::sync::Arc;

const LOG_TARGET: &str = "  registry";

/// A discovered plugin: its identity and its capability.
#[derive(Clone)]
pub struct RegisteredPlugin {
    id: String,
    plugin: Arc<dyn MetricPlugin>,
}

impl RegisteredPlugin {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn plugin(&self) -> &Arc<dyn MetricPlugin> {
        &self.plugin
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.plugin.description()
    }
}

impl Debug for RegisteredPlugin {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegisteredPlugin")
            .field("id", &self.id)
            .field("plugin", &"<dyn MetricPlugin>")
            .finish()
    }
}

/// The metric plugins available to one run, in registration order.
///
/// No two entries share an identity.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<RegisteredPlugin>,
}

impl Registry {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add a plugin, or replace the plugin already registered under `id` in place.
    pub fn register(&mut self, id: impl Into<String>, plugin: Arc<dyn MetricPlugin>) {
        let id = id.into();

        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            log::debug!(target: LOG_TARGET, "Replacing plugin '{id}'");
            entry.plugin = plugin;
        } else {
            log::debug!(target: LOG_TARGET, "Registering plugin '{id}'");
            self.entries.push(RegisteredPlugin { id, plugin });
        }
    }

    /// Load every unit and register those exposing the metric capability.
    ///
    /// The contract-definition unit is skipped. A unit that fails to load aborts discovery.
    /// Discovering the same units again leaves the registry unchanged.
    pub fn discover(&mut self, units: &[PluginUnit]) -> Result<()> {
        for unit in units {
            if unit.id == hooks::UNIT_ID {
                log::trace!(target: LOG_TARGET, "Skipping contract unit '{}'", unit.id);
                continue;
            }

            let loaded = (unit.load)().map_err(|e| e.enrich_with(|| format!("could not load plugin unit '{}'", unit.id)))?;
            match loaded {
                Some(plugin) => self.register(unit.id, plugin),
                None => log::debug!(target: LOG_TARGET, "Unit '{}' is not a metric", unit.id),
            }
        }

        log::info!(target: LOG_TARGET, "Discovered {} plugin(s)", self.entries.len());
        Ok(())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &RegisteredPlugin> {
        self.entries.iter()
    }
}
