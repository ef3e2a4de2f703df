//! Form input API.
//!
//! The host form layer hands each input a [`FieldContext`] and an
//! [`InputEnv`] and asks it for three things, in order:
//! - the widget configuration for the client-side script
//! - the base HTML attributes of the element
//! - the final markup
//!
//! Inputs are looked up by type name through an [`InputRegistry`].

mod assets;
mod capabilities;
mod input;
mod registry;
mod template;
mod types;

pub use assets::{AssetResolver, ManifestAssets};
pub use capabilities::{Capabilities, EFFECTIVE_ASSETS};
pub use input::{FormInput, INPUT_JS_ATTRIBUTE};
pub use registry::{InputEnv, InputFactory, InputRegistry};
pub use template::{HtmlTemplate, Template, html_escape, sanitize_to_id};
pub use types::{FieldContext, HtmlAttributes, InputOptions, WidgetConfig};
