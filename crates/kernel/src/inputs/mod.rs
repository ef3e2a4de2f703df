//! Form inputs shipped with the kernel.

mod ckeditor_text_area;

pub use ckeditor_text_area::{CkeditorTextArea, DEFAULT_CONTENTS_CSS};
