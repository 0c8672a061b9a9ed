use std::collections::HashMap;

use serde::Serialize;

/// A mapping of field keys to their validation error message
pub type ValidationErrors = HashMap<String, String>;

/// The outcome of validating a whole form
///
/// Built only through [`ValidationResult::from_errors`], so `is_valid` always
/// reflects whether the error map is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    errors: ValidationErrors,
}

impl ValidationResult {
    pub fn from_errors(errors: ValidationErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}

pub trait InputValidator {
    fn validate(&self) -> ValidationResult;

    fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }
}

// Helper trait for accumulating validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &str, message: String);
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &str, message: String) {
        self.insert(field.to_string(), message);
    }
}
