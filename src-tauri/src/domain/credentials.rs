//! Credential Forms
//!
//! Login and registration drafts. Presence-only validation, plus
//! password confirmation on registration.

use serde::{Deserialize, Serialize};

use super::entity::{DomainResult, FieldErrors};
use super::feedback::{MSG_FILL_ALL_FIELDS, MSG_PASSWORDS_MISMATCH};

/// Role sent with every self-registration
pub const DEFAULT_ROLE: &str = "user";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        let mut errors = FieldErrors::new();
        if is_blank(&self.username) || is_blank(&self.password) {
            errors.add(FieldErrors::FORM, MSG_FILL_ALL_FIELDS);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> DomainResult<()> {
        let mut errors = FieldErrors::new();
        if is_blank(&self.username) || is_blank(&self.password) || is_blank(&self.confirm_password) {
            errors.add(FieldErrors::FORM, MSG_FILL_ALL_FIELDS);
        } else if self.password != self.confirm_password {
            errors.add(FieldErrors::FORM, MSG_PASSWORDS_MISMATCH);
        }
        errors.into_result()
    }

    /// Body posted to `/registro`
    pub fn payload(&self) -> RegistrationPayload<'_> {
        RegistrationPayload {
            username: &self.username,
            password: &self.password,
            role: DEFAULT_ROLE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegistrationPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}

/// Body returned by `/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn form_message(result: DomainResult<()>) -> String {
        match result {
            Err(DomainError::Validation(errors)) => errors.get(FieldErrors::FORM).unwrap().to_string(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(form_message(LoginForm::new("", "secret").validate()), MSG_FILL_ALL_FIELDS);
        assert_eq!(form_message(LoginForm::new("ana", "").validate()), MSG_FILL_ALL_FIELDS);
        assert!(LoginForm::new("ana", "secret").validate().is_ok());
    }

    #[test]
    fn test_register_mismatch() {
        let form = RegisterForm {
            username: "ana".into(),
            password: "abc".into(),
            confirm_password: "abd".into(),
        };
        assert_eq!(form_message(form.validate()), MSG_PASSWORDS_MISMATCH);
    }

    #[test]
    fn test_register_missing_takes_precedence_over_mismatch() {
        let form = RegisterForm {
            username: "ana".into(),
            password: "abc".into(),
            confirm_password: String::new(),
        };
        assert_eq!(form_message(form.validate()), MSG_FILL_ALL_FIELDS);
    }

    #[test]
    fn test_registration_payload_role() {
        let form = RegisterForm {
            username: "ana".into(),
            password: "abc".into(),
            confirm_password: "abc".into(),
        };
        let json = serde_json::to_value(form.payload()).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "ana", "password": "abc", "role": "user" }));
    }
}
