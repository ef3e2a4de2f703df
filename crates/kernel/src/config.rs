//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::form::{
    AssetResolver, Capabilities, HtmlTemplate, InputEnv, ManifestAssets, Template,
};

/// Kernel configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL prefix for static assets (default: /assets).
    pub assets_prefix: String,

    /// Path to the asset manifest. When None, assets resolve undigested.
    pub asset_manifest: Option<PathBuf>,

    /// Optional integrations reported as present
    /// (from the comma-separated EFFECTIVE_CAPABILITIES env var).
    pub capabilities: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_prefix: "/assets".to_string(),
            asset_manifest: None,
            capabilities: Vec::new(),
        }
    }
}

impl Config {
    /// Load a `.env` file if present, then read the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let assets_prefix = lookup("ASSETS_PREFIX")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "/assets".to_string());

        let asset_manifest = lookup("ASSET_MANIFEST")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let capabilities: Vec<String> = lookup("EFFECTIVE_CAPABILITIES")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            assets_prefix,
            asset_manifest,
            capabilities,
        }
    }

    /// Build the asset resolver described by this configuration.
    pub fn asset_resolver(&self) -> Result<ManifestAssets> {
        match &self.asset_manifest {
            Some(path) => ManifestAssets::load(self.assets_prefix.clone(), path)
                .with_context(|| format!("ASSET_MANIFEST {} could not be loaded", path.display())),
            None => Ok(ManifestAssets::new(self.assets_prefix.clone())),
        }
    }

    /// Build the rendering environment for form inputs.
    pub fn input_env(&self) -> Result<InputEnv> {
        let assets: Arc<dyn AssetResolver> = Arc::new(self.asset_resolver()?);
        let template: Arc<dyn Template> = Arc::new(HtmlTemplate::new(assets));
        let capabilities: Capabilities = self.capabilities.iter().cloned().collect();

        info!(
            assets_prefix = %self.assets_prefix,
            capabilities = ?self.capabilities,
            "form input environment ready"
        );

        Ok(InputEnv::new(template, capabilities))
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::form::EFFECTIVE_ASSETS;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.assets_prefix, "/assets");
        assert!(config.asset_manifest.is_none());
        assert!(config.capabilities.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("ASSETS_PREFIX", "https://cdn.example.com/assets"),
            ("ASSET_MANIFEST", "/srv/app/manifest.json"),
            ("EFFECTIVE_CAPABILITIES", " effective_assets, ,effective_roles "),
        ]);

        assert_eq!(config.assets_prefix, "https://cdn.example.com/assets");
        assert_eq!(
            config.asset_manifest,
            Some(PathBuf::from("/srv/app/manifest.json"))
        );
        assert_eq!(config.capabilities, vec!["effective_assets", "effective_roles"]);
    }

    #[test]
    fn test_input_env_capabilities() {
        let env = config(&[("EFFECTIVE_CAPABILITIES", "effective_assets")])
            .input_env()
            .unwrap();
        assert!(env.capabilities.has(EFFECTIVE_ASSETS));
        assert_eq!(env.template.asset_path("app.js"), "/assets/app.js");
    }

    #[test]
    fn test_root_assets_prefix() {
        let env = config(&[("ASSETS_PREFIX", "/")]).input_env().unwrap();
        assert_eq!(
            env.template.asset_path("effective_ckeditor.js"),
            "/effective_ckeditor.js"
        );
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let err = config(&[("ASSET_MANIFEST", "/nonexistent/manifest.json")])
            .input_env()
            .unwrap_err();
        assert!(err.to_string().contains("ASSET_MANIFEST"));
    }
}
