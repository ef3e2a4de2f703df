//! `effective_email` validator.
//!
//! A structural check only: something, `@`, something, `.`, something.
//! Addresses like `a@b.@c` pass; a full address grammar is out of scope.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{EachValidator, Record, is_blank};

/// Message added when a value does not look like an email address.
pub const INVALID_MESSAGE: &str = "is invalid";

// `.` stops at newlines; `\n?\z` lets a single trailing newline through.
#[allow(clippy::expect_used)]
static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A.+@.+\..+\n?\z").expect("valid regex literal"));

/// Whether `value` matches the email-like pattern.
pub fn is_email_like(value: &str) -> bool {
    PATTERN.is_match(value)
}

/// Validator for attributes holding an email address.
///
/// Blank values are skipped; requiring a value is a presence rule's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub const NAME: &'static str = "effective_email";
}

impl EachValidator for EmailValidator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate_each(&self, record: &mut dyn Record, attribute: &str, value: Option<&str>) {
        let Some(value) = value.filter(|v| !is_blank(Some(*v))) else {
            return;
        };

        if !is_email_like(value) {
            debug!(attribute = %attribute, "email format check failed");
            record.errors_mut().add(attribute, INVALID_MESSAGE);
        }
    }
}
