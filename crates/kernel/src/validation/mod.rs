//! Record validation.
//!
//! Validators are small values implementing [`EachValidator`]. A host
//! declares which attribute each one guards through [`Validations`], with
//! validators looked up by name in a [`ValidatorRegistry`]. Failures never
//! abort anything: they are appended to the record's [`Errors`].

mod email;
mod errors;
mod registry;
mod validations;

pub use email::{EmailValidator, INVALID_MESSAGE, is_email_like};
pub use errors::{BASE, Errors, ValidationError};
pub use registry::ValidatorRegistry;
pub use validations::Validations;

/// A record that can be validated.
pub trait Record {
    /// Errors collected against this record.
    fn errors(&self) -> &Errors;

    fn errors_mut(&mut self) -> &mut Errors;

    /// Current value of an attribute, if it has one.
    fn read_attribute(&self, attribute: &str) -> Option<String>;
}

/// Validates a single attribute value of a record.
pub trait EachValidator: Send + Sync {
    /// Name the validator is registered under (e.g., "effective_email").
    fn name(&self) -> &'static str;

    /// Check `value` and add any errors to `record` under `attribute`.
    fn validate_each(&self, record: &mut dyn Record, attribute: &str, value: Option<&str>);
}

/// Whether a value counts as blank: absent, empty, or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
