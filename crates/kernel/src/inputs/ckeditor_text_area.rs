//! Rich-text textarea enhanced client-side by CKEditor.
//!
//! The input renders a plain `<textarea>`; the `effective_ckeditor` script
//! finds it by class name and reads the widget configuration from its
//! `data-input-js` attribute.

use std::sync::Arc;

use crate::form::{
    Capabilities, EFFECTIVE_ASSETS, FieldContext, FormInput, HtmlAttributes, InputEnv, Template,
    WidgetConfig,
};

/// Stylesheet applied to edited content when the caller supplies none.
pub const DEFAULT_CONTENTS_CSS: &str =
    "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.6/css/bootstrap.min.css";

/// Class the client-side script uses to discover editor textareas.
const INPUT_CLASS: &str = "effective_ckeditor_text_area text";

const JS_ASSET: &str = "effective_ckeditor.js";
const CSS_ASSET: &str = "effective_ckeditor.css";

/// `effective_ckeditor_text_area` form input.
pub struct CkeditorTextArea {
    context: FieldContext,
    template: Arc<dyn Template>,
    capabilities: Arc<Capabilities>,
}

impl CkeditorTextArea {
    /// Type name used to declare this input on a form field.
    pub const TYPE_NAME: &'static str = "effective_ckeditor_text_area";

    pub fn new(context: FieldContext, env: &InputEnv) -> Self {
        Self {
            context,
            template: Arc::clone(&env.template),
            capabilities: Arc::clone(&env.capabilities),
        }
    }

    /// Registry constructor.
    pub fn boxed(context: FieldContext, env: &InputEnv) -> Box<dyn FormInput> {
        Box::new(Self::new(context, env))
    }
}

impl FormInput for CkeditorTextArea {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn context(&self) -> &FieldContext {
        &self.context
    }

    fn default_input_js(&self) -> WidgetConfig {
        let options = &self.context.options;
        let contents_css = options
            .content_css
            .clone()
            .unwrap_or_else(|| DEFAULT_CONTENTS_CSS.to_string());

        WidgetConfig::new()
            .with("effective_assets", self.capabilities.has(EFFECTIVE_ASSETS))
            .with(
                "effective_ckeditor_js_path",
                self.template.asset_path(JS_ASSET),
            )
            .with(
                "effective_ckeditor_css_path",
                self.template.asset_path(CSS_ASSET),
            )
            .with("contentsCss", contents_css)
            .with_opt("toolbar", options.toolbar.clone())
            .with_opt("height", options.height.clone())
            .with_opt("width", options.width.clone())
    }

    fn default_input_html(&self) -> HtmlAttributes {
        HtmlAttributes::new().with("class", INPUT_CLASS)
    }

    fn to_html(&self) -> String {
        self.template.text_area_tag(
            &self.context.field_name,
            self.context.value.as_deref(),
            &self.tag_options(),
        )
    }
}

impl std::fmt::Debug for CkeditorTextArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CkeditorTextArea")
            .field("context", &self.context)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}
