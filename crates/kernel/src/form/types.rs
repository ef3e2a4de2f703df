//! Field context, widget configuration and HTML attribute types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-render bundle handed to a form input by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldContext {
    /// Form field name (e.g., "post[body]").
    pub field_name: String,

    /// Current value of the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Caller-supplied input options.
    #[serde(default)]
    pub options: InputOptions,

    /// Caller HTML attributes, merged over the input's defaults by the host.
    #[serde(default, skip_serializing_if = "HtmlAttributes::is_empty")]
    pub input_html: HtmlAttributes,

    /// Caller widget configuration, merged over the input's defaults by the host.
    #[serde(default, skip_serializing_if = "WidgetConfig::is_empty")]
    pub input_js: WidgetConfig,
}

impl FieldContext {
    /// Create a context for the given field name.
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            ..Self::default()
        }
    }

    /// Set the current value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the input options.
    pub fn options(mut self, options: InputOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a caller HTML attribute.
    pub fn input_html(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.input_html.insert(name, value);
        self
    }

    /// Add a caller widget configuration override.
    pub fn input_js(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.input_js.insert(key, value);
        self
    }
}

/// Options recognised by rich-text inputs.
///
/// Every key is optional. `toolbar`, `height` and `width` are opaque to the
/// kernel and handed to the widget as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputOptions {
    /// Toolbar layout descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolbar: Option<Value>,

    /// Editor height hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Value>,

    /// Editor width hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Value>,

    /// Stylesheet URL applied to the edited content.
    #[serde(
        default,
        rename = "contentCss",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_css: Option<String>,
}

impl InputOptions {
    /// Set the toolbar descriptor.
    pub fn toolbar(mut self, toolbar: impl Into<Value>) -> Self {
        self.toolbar = Some(toolbar.into());
        self
    }

    /// Set the height hint.
    pub fn height(mut self, height: impl Into<Value>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Set the width hint.
    pub fn width(mut self, width: impl Into<Value>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set the content stylesheet URL.
    pub fn content_css(mut self, url: impl Into<String>) -> Self {
        self.content_css = Some(url.into());
        self
    }
}

/// Configuration handed to a client-side widget initializer.
///
/// Only present values are ever stored: a missing key means "use the widget
/// default", so there is no way to insert a null through the builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct WidgetConfig(BTreeMap<String, Value>);

impl From<BTreeMap<String, Value>> for WidgetConfig {
    fn from(mut map: BTreeMap<String, Value>) -> Self {
        map.retain(|_, value| !value.is_null());
        Self(map)
    }
}

impl WidgetConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. `Value::Null` is dropped.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        match value.into() {
            Value::Null => {}
            value => {
                self.0.insert(key.into(), value);
            }
        }
    }

    /// Insert a value only when one is present.
    pub fn insert_opt<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Builder form of [`WidgetConfig::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`WidgetConfig::insert_opt`].
    pub fn with_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Lay every entry of `other` over this configuration.
    pub fn merge(&mut self, other: &WidgetConfig) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone().into_iter().collect()).to_string()
    }
}

/// HTML attributes for a rendered element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlAttributes(BTreeMap<String, String>);

impl HtmlAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder form of [`HtmlAttributes::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Lay `other` over these attributes.
    ///
    /// `class` values are joined (ours first) instead of replaced.
    pub fn merge(&mut self, other: &HtmlAttributes) {
        for (name, value) in &other.0 {
            if name == "class" {
                let joined = match self.0.get("class") {
                    Some(existing) if !existing.is_empty() && !value.is_empty() => {
                        format!("{existing} {value}")
                    }
                    Some(existing) if value.is_empty() => existing.clone(),
                    _ => value.clone(),
                };
                self.0.insert(name.clone(), joined);
            } else {
                self.0.insert(name.clone(), value.clone());
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HtmlAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_widget_config_skips_absent_values() {
        let config = WidgetConfig::new()
            .with("present", "yes")
            .with_opt("missing", None::<String>)
            .with("null", Value::Null);

        assert_eq!(config.len(), 1);
        assert!(config.contains_key("present"));
        assert!(!config.contains_key("missing"));
        assert!(!config.contains_key("null"));
    }

    #[test]
    fn test_widget_config_merge_overrides() {
        let mut config = WidgetConfig::new().with("height", 200).with("width", 300);
        config.merge(&WidgetConfig::new().with("height", 400));

        assert_eq!(config.get("height"), Some(&json!(400)));
        assert_eq!(config.get("width"), Some(&json!(300)));
    }

    #[test]
    fn test_widget_config_to_json() {
        let config = WidgetConfig::new().with("b", true).with("a", "x");
        let parsed: Value = serde_json::from_str(&config.to_json()).unwrap();
        assert_eq!(parsed, json!({"a": "x", "b": true}));
    }

    #[test]
    fn test_widget_config_deserialize_drops_nulls() {
        let config: WidgetConfig =
            serde_json::from_value(json!({"height": null, "width": 300})).unwrap();
        assert!(!config.contains_key("height"));
        assert_eq!(config.get("width"), Some(&json!(300)));
    }

    #[test]
    fn test_html_attributes_merge_joins_class() {
        let mut attrs = HtmlAttributes::new().with("class", "base text");
        attrs.merge(
            &HtmlAttributes::new()
                .with("class", "extra")
                .with("rows", "5"),
        );

        assert_eq!(attrs.get("class"), Some("base text extra"));
        assert_eq!(attrs.get("rows"), Some("5"));
    }

    #[test]
    fn test_html_attributes_merge_empty_class() {
        let mut attrs = HtmlAttributes::new().with("class", "base");
        attrs.merge(&HtmlAttributes::new().with("class", ""));
        assert_eq!(attrs.get("class"), Some("base"));

        let mut bare = HtmlAttributes::new();
        bare.merge(&HtmlAttributes::new().with("class", "only"));
        assert_eq!(bare.get("class"), Some("only"));
    }

    #[test]
    fn test_input_options_deserialize_content_css() {
        let options: InputOptions = serde_json::from_value(json!({
            "toolbar": "simple",
            "contentCss": "/site.css"
        }))
        .unwrap();

        assert_eq!(options.toolbar, Some(json!("simple")));
        assert_eq!(options.content_css.as_deref(), Some("/site.css"));
        assert!(options.height.is_none());
    }

    #[test]
    fn test_field_context_builder() {
        let ctx = FieldContext::new("bio")
            .value("Hello")
            .input_html("rows", "4")
            .input_js("height", 120);

        assert_eq!(ctx.field_name, "bio");
        assert_eq!(ctx.value.as_deref(), Some("Hello"));
        assert_eq!(ctx.input_html.get("rows"), Some("4"));
        assert_eq!(ctx.input_js.get("height"), Some(&json!(120)));
    }
}
