//! The contract between a form input and the host renderer.

use super::types::{FieldContext, HtmlAttributes, WidgetConfig};

/// Data attribute carrying the widget configuration as JSON.
pub const INPUT_JS_ATTRIBUTE: &str = "data-input-js";

/// A form input the host can render.
///
/// Implementors supply the three query points; the host calls them in order
/// `default_input_js`, `default_input_html`, `to_html`. Each is pure given
/// the same field context and environment.
///
/// The provided methods are the host side of the contract: they lay the
/// caller's overrides from the [`FieldContext`] over the input's defaults.
pub trait FormInput: Send + Sync {
    /// Type name the input is registered under.
    fn type_name(&self) -> &'static str;

    /// The field being rendered.
    fn context(&self) -> &FieldContext;

    /// Widget configuration before caller overrides.
    fn default_input_js(&self) -> WidgetConfig;

    /// Base HTML attributes before caller overrides.
    fn default_input_html(&self) -> HtmlAttributes;

    /// Final markup for the field.
    fn to_html(&self) -> String;

    /// Widget configuration with the caller's `input_js` laid over it.
    fn js_options(&self) -> WidgetConfig {
        let mut config = self.default_input_js();
        config.merge(&self.context().input_js);
        config
    }

    /// HTML attributes with the caller's `input_html` laid over them.
    fn html_options(&self) -> HtmlAttributes {
        let mut attrs = self.default_input_html();
        attrs.merge(&self.context().input_html);
        attrs
    }

    /// Attributes for the rendered element, including the widget
    /// configuration under [`INPUT_JS_ATTRIBUTE`].
    fn tag_options(&self) -> HtmlAttributes {
        let mut attrs = self.html_options();
        attrs.insert(INPUT_JS_ATTRIBUTE, self.js_options().to_json());
        attrs
    }
}
