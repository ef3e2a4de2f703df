//! Registry of named validators.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::error::{KernelError, KernelResult};

use super::EachValidator;
use super::email::EmailValidator;

/// Registry of validators by name.
///
/// Cloning is cheap; clones share the same entries.
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: Arc<DashMap<String, Arc<dyn EachValidator>>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the kernel's validators registered.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(EmailValidator));
        registry
    }

    /// Register a validator under its own name.
    pub fn register(&self, validator: Arc<dyn EachValidator>) {
        let name = validator.name();
        if self
            .validators
            .insert(name.to_string(), validator)
            .is_some()
        {
            warn!(validator = %name, "validator re-registered");
        } else {
            debug!(validator = %name, "validator registered");
        }
    }

    /// Look up a validator by name.
    pub fn get(&self, name: &str) -> KernelResult<Arc<dyn EachValidator>> {
        self.validators
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| KernelError::UnknownValidator(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Registered validator names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.validators.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("validators", &self.names())
            .finish()
    }
}
