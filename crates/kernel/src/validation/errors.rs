//! Per-record error accumulation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute name for errors that belong to the record as a whole.
pub const BASE: &str = "base";

/// Messages collected against a record, grouped by attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Errors {
    messages: BTreeMap<String, Vec<String>>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to an attribute.
    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.messages
            .entry(attribute.into())
            .or_default()
            .push(message.into());
    }

    /// Messages for one attribute (empty when it has none).
    pub fn get(&self, attribute: &str) -> &[String] {
        self.messages
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `attribute` carries `message`.
    pub fn added(&self, attribute: &str, message: &str) -> bool {
        self.get(attribute).iter().any(|m| m == message)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Total number of messages across all attributes.
    pub fn len(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Attributes that have at least one message.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Every message as `"<Humanized attribute> <message>"`.
    ///
    /// Messages on [`BASE`] are returned without a prefix.
    pub fn full_messages(&self) -> Vec<String> {
        self.messages
            .iter()
            .flat_map(|(attribute, messages)| {
                messages.iter().map(move |message| {
                    if attribute == BASE {
                        message.clone()
                    } else {
                        format!("{} {message}", humanize(attribute))
                    }
                })
            })
            .collect()
    }

    /// Flatten into one [`ValidationError`] per message.
    pub fn to_vec(&self) -> Vec<ValidationError> {
        self.messages
            .iter()
            .flat_map(|(attribute, messages)| {
                messages.iter().map(move |message| {
                    if attribute == BASE {
                        ValidationError::record(message.clone())
                    } else {
                        ValidationError::field(attribute.clone(), message.clone())
                    }
                })
            })
            .collect()
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Attribute name (None for record-level errors).
    pub field: Option<String>,

    /// Error message.
    pub message: String,
}

impl ValidationError {
    /// Create a field-level error.
    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(name.into()),
            message: message.into(),
        }
    }

    /// Create a record-level error.
    pub fn record(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// `email_address` -> `Email address`, `author_id` -> `Author`.
fn humanize(attribute: &str) -> String {
    let name = attribute.strip_suffix("_id").unwrap_or(attribute);
    let spaced = name.replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
