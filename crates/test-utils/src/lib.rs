//! Effective test utilities.
//!
//! Helpers for integration testing: a recording asset resolver, rendering
//! environments with chosen capabilities, and an in-memory record for
//! validator tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use effective_kernel::form::{AssetResolver, Capabilities, HtmlTemplate, InputEnv};
use effective_kernel::validation::{Errors, Record};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Filter with `RUST_LOG` (default: `warn`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed by the harness.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

/// Asset resolver that serves everything from a fixed prefix and records
/// every lookup.
#[derive(Debug, Default)]
pub struct StubAssets {
    prefix: String,
    requested: Mutex<Vec<String>>,
}

impl StubAssets {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Sources looked up so far, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl AssetResolver for StubAssets {
    fn asset_path(&self, source: &str) -> String {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(source.to_string());
        }
        format!("{}/{source}", self.prefix)
    }
}

/// Create a rendering environment with stub assets under `/stub` and the
/// given capabilities enabled.
pub fn test_env(capabilities: &[&str]) -> InputEnv {
    test_env_with_assets(Arc::new(StubAssets::new("/stub")), capabilities)
}

/// Create a rendering environment around a caller-held asset resolver.
pub fn test_env_with_assets(assets: Arc<StubAssets>, capabilities: &[&str]) -> InputEnv {
    let capabilities: Capabilities = capabilities.iter().copied().collect();
    InputEnv::new(Arc::new(HtmlTemplate::new(assets)), capabilities)
}

/// Create an empty test record.
pub fn test_record() -> TestRecord {
    TestRecord::default()
}

/// In-memory record for validator tests.
#[derive(Debug, Clone, Default)]
pub struct TestRecord {
    pub attributes: HashMap<String, String>,
    pub errors: Errors,
}

impl TestRecord {
    /// Set an attribute value.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Set the email attribute.
    pub fn with_email(self, email: &str) -> Self {
        self.with_attribute("email", email)
    }
}

impl Record for TestRecord {
    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }

    fn read_attribute(&self, attribute: &str) -> Option<String> {
        self.attributes.get(attribute).cloned()
    }
}
