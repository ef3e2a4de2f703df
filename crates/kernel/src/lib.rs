//! Effective Kernel Library
//!
//! Form inputs and record validators for host web frameworks:
//! - `effective_ckeditor_text_area`, a textarea enhanced client-side by CKEditor
//! - `effective_email`, a permissive email format validator

pub mod config;
pub mod error;
pub mod form;
pub mod inputs;
pub mod validation;

pub use error::{KernelError, KernelResult};
