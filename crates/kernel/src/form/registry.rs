//! Registry mapping input type names to constructors.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::error::{KernelError, KernelResult};
use crate::inputs::CkeditorTextArea;

use super::capabilities::Capabilities;
use super::input::FormInput;
use super::template::Template;
use super::types::FieldContext;

/// Shared rendering environment handed to every input.
#[derive(Clone)]
pub struct InputEnv {
    /// View helpers.
    pub template: Arc<dyn Template>,

    /// Optional integrations present in the host.
    pub capabilities: Arc<Capabilities>,
}

impl InputEnv {
    pub fn new(template: Arc<dyn Template>, capabilities: Capabilities) -> Self {
        Self {
            template,
            capabilities: Arc::new(capabilities),
        }
    }
}

impl std::fmt::Debug for InputEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputEnv")
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

/// Constructor for a registered input type.
pub type InputFactory = fn(FieldContext, &InputEnv) -> Box<dyn FormInput>;

/// Registry of form input types.
///
/// Hosts build one at startup and look inputs up by the type name a form
/// field declares.
#[derive(Clone, Default)]
pub struct InputRegistry {
    factories: Arc<DashMap<String, InputFactory>>,
}

impl InputRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the kernel's inputs registered.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(CkeditorTextArea::TYPE_NAME, CkeditorTextArea::boxed);
        registry
    }

    /// Register an input type. A later registration replaces an earlier one.
    pub fn register(&self, type_name: impl Into<String>, factory: InputFactory) {
        let type_name = type_name.into();
        if self
            .factories
            .insert(type_name.clone(), factory)
            .is_some()
        {
            warn!(type_name = %type_name, "input type re-registered");
        } else {
            debug!(type_name = %type_name, "input type registered");
        }
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.factories.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Instantiate the input registered under `type_name`.
    pub fn build(
        &self,
        type_name: &str,
        context: FieldContext,
        env: &InputEnv,
    ) -> KernelResult<Box<dyn FormInput>> {
        let factory = self
            .factories
            .get(type_name)
            .map(|entry| *entry.value())
            .ok_or_else(|| KernelError::UnknownInput(type_name.to_string()))?;

        Ok(factory(context, env))
    }

    /// Build and render a field in one step.
    pub fn render(
        &self,
        type_name: &str,
        context: FieldContext,
        env: &InputEnv,
    ) -> KernelResult<String> {
        let input = self.build(type_name, context, env)?;
        debug!(
            type_name = %type_name,
            field = %input.context().field_name,
            "rendering form input"
        );
        Ok(input.to_html())
    }
}

impl std::fmt::Debug for InputRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}
