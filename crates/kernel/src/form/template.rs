//! View helpers consumed by form inputs.

use std::fmt::Write;
use std::sync::Arc;

use super::assets::AssetResolver;
use super::types::HtmlAttributes;

/// Markup helpers a host exposes to inputs while rendering.
pub trait Template: Send + Sync {
    /// Resolve a static asset to its public path.
    fn asset_path(&self, source: &str) -> String;

    /// Render `<name attrs>content</name>` with escaped content.
    fn content_tag(&self, name: &str, content: &str, attrs: &HtmlAttributes) -> String;

    /// Render a `<textarea>` for a form field.
    fn text_area_tag(&self, name: &str, content: Option<&str>, attrs: &HtmlAttributes) -> String;
}

/// Default string-building template backed by an asset resolver.
#[derive(Clone)]
pub struct HtmlTemplate {
    assets: Arc<dyn AssetResolver>,
}

impl HtmlTemplate {
    pub fn new(assets: Arc<dyn AssetResolver>) -> Self {
        Self { assets }
    }
}

impl std::fmt::Debug for HtmlTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlTemplate").finish()
    }
}

impl Template for HtmlTemplate {
    fn asset_path(&self, source: &str) -> String {
        self.assets.asset_path(source)
    }

    fn content_tag(&self, name: &str, content: &str, attrs: &HtmlAttributes) -> String {
        format!(
            "<{name}{}>{}</{name}>",
            render_attributes(&[], attrs),
            html_escape(content)
        )
    }

    fn text_area_tag(&self, name: &str, content: Option<&str>, attrs: &HtmlAttributes) -> String {
        let id = sanitize_to_id(name);
        let leading = [("name", name), ("id", id.as_str())];

        // Browsers drop one newline right after <textarea>, so emit one to
        // keep a value's own leading newline intact.
        format!(
            "<textarea{}>\n{}</textarea>",
            render_attributes(&leading, attrs),
            html_escape(content.unwrap_or_default())
        )
    }
}

/// HTML-escape a string for safe output.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Turn a field name such as `post[body]` into an element id (`post_body`).
pub fn sanitize_to_id(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ']')
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Render attributes as ` key="value"` pairs.
///
/// `leading` pairs come first in the given order; `attrs` follow and may
/// override a leading pair, which then keeps its leading position.
fn render_attributes(leading: &[(&str, &str)], attrs: &HtmlAttributes) -> String {
    let mut html = String::new();

    for &(key, value) in leading {
        let value = attrs.get(key).unwrap_or(value);
        // SAFETY: write!() to String is infallible
        #[allow(clippy::unwrap_used)]
        write!(html, r#" {key}="{}""#, html_escape(value)).unwrap();
    }

    for (key, value) in attrs.iter() {
        if leading.iter().any(|(k, _)| *k == key) {
            continue;
        }
        // SAFETY: write!() to String is infallible
        #[allow(clippy::unwrap_used)]
        write!(html, r#" {key}="{}""#, html_escape(value)).unwrap();
    }

    html
}
