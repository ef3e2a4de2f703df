//! Declared validation rules for a record type.

use std::sync::Arc;

use tracing::debug;

use crate::error::KernelResult;

use super::registry::ValidatorRegistry;
use super::{EachValidator, Record};

/// Ordered list of `(attribute, validator)` rules.
///
/// ```ignore
/// let validations = Validations::new(&registry)
///     .validates("email", "effective_email")?;
///
/// if !validations.run(&mut contact) {
///     // contact.errors() now holds the failures
/// }
/// ```
#[derive(Clone)]
pub struct Validations {
    registry: ValidatorRegistry,
    rules: Vec<(String, Arc<dyn EachValidator>)>,
}

impl Validations {
    pub fn new(registry: &ValidatorRegistry) -> Self {
        Self {
            registry: registry.clone(),
            rules: Vec::new(),
        }
    }

    /// Guard `attribute` with the validator registered as `validator`.
    pub fn validates(mut self, attribute: impl Into<String>, validator: &str) -> KernelResult<Self> {
        let validator = self.registry.get(validator)?;
        self.rules.push((attribute.into(), validator));
        Ok(self)
    }

    /// Guard `attribute` with a validator instance directly.
    pub fn validates_with(
        mut self,
        attribute: impl Into<String>,
        validator: Arc<dyn EachValidator>,
    ) -> Self {
        self.rules.push((attribute.into(), validator));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Clear the record's errors, run every rule, and report validity.
    pub fn run(&self, record: &mut dyn Record) -> bool {
        record.errors_mut().clear();

        for (attribute, validator) in &self.rules {
            let value = record.read_attribute(attribute);
            validator.validate_each(record, attribute, value.as_deref());
        }

        let valid = record.errors().is_empty();
        debug!(
            rules = self.rules.len(),
            errors = record.errors().len(),
            valid,
            "record validated"
        );
        valid
    }
}

impl std::fmt::Debug for Validations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rules: Vec<_> = self
            .rules
            .iter()
            .map(|(attribute, validator)| format!("{attribute}: {}", validator.name()))
            .collect();
        f.debug_struct("Validations").field("rules", &rules).finish()
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::KernelError;
    use crate::validation::{EmailValidator, Errors};

    #[derive(Default)]
    struct Signup {
        fields: HashMap<String, String>,
        errors: Errors,
    }

    impl Record for Signup {
        fn errors(&self) -> &Errors {
            &self.errors
        }

        fn errors_mut(&mut self) -> &mut Errors {
            &mut self.errors
        }

        fn read_attribute(&self, attribute: &str) -> Option<String> {
            self.fields.get(attribute).cloned()
        }
    }

    fn signup(email: &str) -> Signup {
        let mut record = Signup::default();
        record.fields.insert("email".to_string(), email.to_string());
        record
    }

    #[test]
    fn test_run_valid_record() {
        let registry = ValidatorRegistry::with_defaults();
        let validations = Validations::new(&registry)
            .validates("email", "effective_email")
            .unwrap();

        let mut record = signup("a@b.com");
        assert!(validations.run(&mut record));
        assert!(record.errors.is_empty());
    }

    #[test]
    fn test_run_invalid_record() {
        let registry = ValidatorRegistry::with_defaults();
        let validations = Validations::new(&registry)
            .validates("email", "effective_email")
            .unwrap();

        let mut record = signup("nope");
        assert!(!validations.run(&mut record));
        assert_eq!(record.errors.get("email"), ["is invalid"]);
    }

    #[test]
    fn test_run_clears_previous_errors() {
        let registry = ValidatorRegistry::with_defaults();
        let validations = Validations::new(&registry)
            .validates("email", "effective_email")
            .unwrap();

        let mut record = signup("nope");
        assert!(!validations.run(&mut record));

        record
            .fields
            .insert("email".to_string(), "a@b.com".to_string());
        assert!(validations.run(&mut record));
        assert!(record.errors.is_empty());
    }

    #[test]
    fn test_missing_attribute_is_skipped() {
        let registry = ValidatorRegistry::with_defaults();
        let validations = Validations::new(&registry)
            .validates("backup_email", "effective_email")
            .unwrap();

        let mut record = Signup::default();
        assert!(validations.run(&mut record));
    }

    #[test]
    fn test_unknown_validator_rejected() {
        let registry = ValidatorRegistry::with_defaults();
        let err = Validations::new(&registry)
            .validates("phone", "effective_phone")
            .err()
            .unwrap();

        assert!(matches!(err, KernelError::UnknownValidator(_)));
    }

    #[test]
    fn test_validates_with_instance() {
        let validations = Validations::new(&ValidatorRegistry::new())
            .validates_with("email", Arc::new(EmailValidator))
            .validates_with("work_email", Arc::new(EmailValidator));
        assert_eq!(validations.len(), 2);

        let mut record = signup("a@b.com");
        record
            .fields
            .insert("work_email".to_string(), "x".to_string());

        assert!(!validations.run(&mut record));
        assert_eq!(record.errors.full_messages(), vec!["Work email is invalid"]);
    }
}
