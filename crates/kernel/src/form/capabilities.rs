//! Optional integrations the host reports as available.

use std::collections::BTreeSet;

/// Capability name for the effective_assets integration.
pub const EFFECTIVE_ASSETS: &str = "effective_assets";

/// Set of optional integrations present in the host.
///
/// Inputs probe this set; a missing integration only turns a flag off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    names: BTreeSet<String>,
}

impl Capabilities {
    /// Create an empty capability set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a capability.
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.enable(name);
        self
    }

    pub fn enable(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn disable(&mut self, name: &str) {
        self.names.remove(name);
    }

    /// Whether the named capability is present.
    pub fn has(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Capabilities {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
