//! Static asset path resolution.
//!
//! Inputs never compute asset URLs themselves; they ask an [`AssetResolver`]
//! backed by a manifest that the build step already produced.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{KernelError, KernelResult};

/// Resolves a logical asset name to a public URL path.
pub trait AssetResolver: Send + Sync {
    /// Resolve `source` (e.g., "effective_ckeditor.js").
    fn asset_path(&self, source: &str) -> String;
}

/// On-disk manifest format: logical name to digested file name.
#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    assets: HashMap<String, String>,
}

/// Manifest-backed asset resolver.
#[derive(Debug, Clone)]
pub struct ManifestAssets {
    prefix: String,
    assets: HashMap<String, String>,
}

impl ManifestAssets {
    /// Create a resolver with no manifest entries.
    ///
    /// Every source resolves to `{prefix}/{source}`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: normalize_prefix(prefix.into()),
            assets: HashMap::new(),
        }
    }

    /// Add a manifest entry.
    pub fn with_asset(mut self, logical: impl Into<String>, digested: impl Into<String>) -> Self {
        self.assets.insert(logical.into(), digested.into());
        self
    }

    /// Parse a manifest from its JSON text.
    pub fn from_json(prefix: impl Into<String>, json: &str) -> KernelResult<Self> {
        let manifest: Manifest =
            serde_json::from_str(json).map_err(|source| KernelError::Manifest {
                path: "<inline>".to_string(),
                source,
            })?;

        Ok(Self {
            prefix: normalize_prefix(prefix.into()),
            assets: manifest.assets,
        })
    }

    /// Load a manifest file.
    pub fn load(prefix: impl Into<String>, path: &Path) -> KernelResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| KernelError::ManifestRead {
            path: path.display().to_string(),
            source,
        })?;

        let manifest: Manifest =
            serde_json::from_str(&json).map_err(|source| KernelError::Manifest {
                path: path.display().to_string(),
                source,
            })?;

        info!(
            path = %path.display(),
            count = manifest.assets.len(),
            "asset manifest loaded"
        );

        Ok(Self {
            prefix: normalize_prefix(prefix.into()),
            assets: manifest.assets,
        })
    }

    /// URL prefix applied to every resolved asset.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl AssetResolver for ManifestAssets {
    fn asset_path(&self, source: &str) -> String {
        // Already a URL or an absolute path.
        if source.starts_with('/') || source.contains("://") {
            return source.to_string();
        }

        match self.assets.get(source) {
            Some(digested) => format!("{}/{digested}", self.prefix),
            None => {
                debug!(source = %source, "asset not in manifest, using undigested path");
                format!("{}/{source}", self.prefix)
            }
        }
    }
}

fn normalize_prefix(prefix: String) -> String {
    let trimmed = prefix.trim_end_matches('/');
    // A root prefix stays empty so joined paths never start with "//".
    if trimmed.is_empty() || trimmed.starts_with('/') || trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_hit_uses_digested_name() {
        let assets = ManifestAssets::new("/assets")
            .with_asset("effective_ckeditor.js", "effective_ckeditor-3f2a.js");

        assert_eq!(
            assets.asset_path("effective_ckeditor.js"),
            "/assets/effective_ckeditor-3f2a.js"
        );
    }

    #[test]
    fn test_manifest_miss_falls_back_to_prefix() {
        let assets = ManifestAssets::new("/assets/");
        assert_eq!(
            assets.asset_path("effective_ckeditor.css"),
            "/assets/effective_ckeditor.css"
        );
    }

    #[test]
    fn test_absolute_sources_pass_through() {
        let assets = ManifestAssets::new("/assets");
        assert_eq!(assets.asset_path("/static/app.js"), "/static/app.js");
        assert_eq!(
            assets.asset_path("https://cdn.example.com/app.js"),
            "https://cdn.example.com/app.js"
        );
    }

    #[test]
    fn test_prefix_normalization() {
        assert_eq!(ManifestAssets::new("assets").prefix(), "/assets");
        assert_eq!(
            ManifestAssets::new("https://cdn.example.com/").prefix(),
            "https://cdn.example.com"
        );
    }

    #[test]
    fn test_root_prefix_resolves_to_site_root() {
        for prefix in ["/", "", "//"] {
            let assets = ManifestAssets::new(prefix)
                .with_asset("effective_ckeditor.css", "effective_ckeditor-9c1d.css");

            assert_eq!(assets.prefix(), "", "prefix {prefix:?}");
            assert_eq!(
                assets.asset_path("effective_ckeditor.js"),
                "/effective_ckeditor.js",
                "miss with prefix {prefix:?}"
            );
            assert_eq!(
                assets.asset_path("effective_ckeditor.css"),
                "/effective_ckeditor-9c1d.css",
                "hit with prefix {prefix:?}"
            );
        }
    }

    #[test]
    fn test_from_json() {
        let assets = ManifestAssets::from_json(
            "/assets",
            r#"{"files": {}, "assets": {"effective_ckeditor.css": "effective_ckeditor-9c1d.css"}}"#,
        )
        .unwrap();

        assert_eq!(
            assets.asset_path("effective_ckeditor.css"),
            "/assets/effective_ckeditor-9c1d.css"
        );
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ManifestAssets::from_json("/assets", "{not json").unwrap_err();
        assert!(matches!(err, KernelError::Manifest { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ManifestAssets::load("/assets", Path::new("/nonexistent/manifest.json"))
            .unwrap_err();
        assert!(matches!(err, KernelError::ManifestRead { .. }));
    }
}
