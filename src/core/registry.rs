use crate::core::declarations::{PRODUCES_NUMBER, RUNNABLE};
use crate::domain::model::Capability;
use crate::utils::error::{CapcheckError, Result};
use std::collections::BTreeMap;

/// Capabilities addressable by name, e.g. from a check plan.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    capabilities: BTreeMap<&'static str, &'static Capability>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for capability in [&PRODUCES_NUMBER, &RUNNABLE] {
            registry.capabilities.insert(capability.name, capability);
        }
        registry
    }

    pub fn register(&mut self, capability: &'static Capability) -> Result<()> {
        if self.capabilities.contains_key(capability.name) {
            return Err(CapcheckError::DuplicateCapability {
                name: capability.name.to_string(),
            });
        }
        tracing::debug!(capability = capability.name, "registered capability");
        self.capabilities.insert(capability.name, capability);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&'static Capability> {
        self.capabilities.get(name).copied()
    }

    pub fn lookup(&self, name: &str) -> Result<&'static Capability> {
        self.get(name).ok_or_else(|| CapcheckError::UnknownCapability {
            name: name.to_string(),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.capabilities.keys().copied()
    }
}
