//! In-memory registry keyed by exact component name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use studio_core::StudioError;

use super::types::ComponentConfig;

/// Component name to playground metadata. Read-only after load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRegistry {
    components: IndexMap<String, ComponentConfig>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a registry from a YAML mapping of name to config.
    pub fn from_yaml_str(source: &str) -> Result<Self, StudioError> {
        serde_yaml::from_str(source).map_err(|err| StudioError::load("components", err))
    }

    /// Adds or replaces an entry, builder style.
    pub fn with(mut self, name: impl Into<String>, config: ComponentConfig) -> Self {
        self.components.insert(name.into(), config);
        self
    }

    /// Case-sensitive lookup. `None` means "not configured"; callers
    /// render nothing for the slot.
    pub fn lookup(&self, name: &str) -> Option<&ComponentConfig> {
        self.components.get(name)
    }

    /// Lookup that reports a missing entry as [`StudioError::ConfigurationMissing`].
    pub fn require(&self, name: &str) -> Result<&ComponentConfig, StudioError> {
        self.lookup(name)
            .ok_or_else(|| StudioError::ConfigurationMissing {
                name: name.to_string(),
            })
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentConfig)> {
        self.components.iter().map(|(name, config)| (name.as_str(), config))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
