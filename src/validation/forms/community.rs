use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validation::field_validators::FieldValidator;
use crate::validation::input_validator::{
    InputValidator, ValidationErrors, ValidationErrorsExt, ValidationResult,
};

/// Raw fields of the community-creation form, as collected by the form layer
///
/// `description` and `tags` distinguish absent (`None`) from present but
/// empty; a field missing from the JSON payload deserializes to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityFormInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl InputValidator for CommunityFormInput {
    fn validate(&self) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        // Every field is checked; an earlier failure never skips a later one
        let checks = [
            FieldValidator::validate_name(&self.name),
            FieldValidator::validate_description(self.description.as_deref()),
            FieldValidator::validate_tags(self.tags.as_deref()),
        ];

        for error in checks.into_iter().flatten() {
            errors.add_error(error.field_key(), error.to_string());
        }

        if !errors.is_empty() {
            debug!(invalid_fields = errors.len(), "community form failed validation");
        }

        ValidationResult::from_errors(errors)
    }
}
