//! Request payload validation
//!
//! Enforced at the HTTP boundary before a payload reaches a registry;
//! the registries assume their inputs already passed these checks.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::NewEmployee;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".+@.+\.[a-z]+").expect("email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_department_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("name should not be empty"));
    }
    Ok(())
}

pub fn validate_employee(payload: &NewEmployee) -> Result<(), ValidationError> {
    if payload.name.is_empty() {
        return Err(ValidationError::new("name should not be empty"));
    }

    if let Some(email) = &payload.email {
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ValidationError::new(format!("invalid email: {}", email)));
        }
    }

    if let Some(age) = payload.age {
        if age < 1 {
            return Err(ValidationError::new("age should be a positive integer"));
        }
    }

    Ok(())
}
