pub mod field_validators;
pub mod forms;
pub mod input_validator;

// Re-export common types and functions
pub use field_validators::{CommunityFieldError, FieldValidator};
pub use forms::community::CommunityFormInput;
pub use input_validator::{InputValidator, ValidationErrors, ValidationResult};
