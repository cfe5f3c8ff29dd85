//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Per-field validation messages, keyed by the form field's wire name.
///
/// Whole-form messages (login/register) use the [`FieldErrors::FORM`] key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub const FORM: &'static str = "form";

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. The first message recorded for a field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error.
    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    /// Client-side validation failed; never reaches the network
    Validation(FieldErrors),
    /// Transport failure (connection refused, timeout, undecodable body)
    Network(String),
    /// Server answered with a non-2xx status
    Rejected { status: u16 },
    Storage(String),
    Internal(String),
    /// Already collapsed to the message shown to the user
    Failed(String),
}

impl DomainError {
    /// True for failures that never got an HTTP answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, DomainError::Network(_))
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Validation(errors) => write!(f, "Validation failed: {} field(s)", errors.len()),
            DomainError::Network(msg) => write!(f, "Network error: {}", msg),
            DomainError::Rejected { status } => write!(f, "Rejected by server: HTTP {}", status),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
            DomainError::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.add("promocao", "first");
        errors.add("promocao", "second");
        assert_eq!(errors.get("promocao"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_empty_field_errors_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_error_serialization_shape() {
        let err = DomainError::Rejected { status: 401 };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({ "Rejected": { "status": 401 } }));

        let mut fields = FieldErrors::new();
        fields.add(FieldErrors::FORM, "msg");
        let json = serde_json::to_value(DomainError::Validation(fields)).unwrap();
        assert_eq!(json, serde_json::json!({ "Validation": { "form": "msg" } }));
    }

    #[test]
    fn test_transport_classification() {
        assert!(DomainError::Network("refused".into()).is_transport());
        assert!(!DomainError::Rejected { status: 500 }.is_transport());
    }
}
