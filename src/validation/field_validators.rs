use std::fmt;

/// Maximum length of a community name, in characters
pub const MAX_NAME_LENGTH: usize = 100;
/// Maximum length of a community description, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
/// Maximum number of tags on a community
pub const MAX_TAGS: usize = 10;

/// Various ways a community-creation form field can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityFieldError {
    /// Name is empty or whitespace-only
    NameRequired,
    /// Name exceeds the length limit
    NameTooLong,
    /// Description exceeds the length limit
    DescriptionTooLong,
    /// More tags than allowed
    TooManyTags,
}

impl CommunityFieldError {
    /// The form field key this error is reported under
    pub fn field_key(&self) -> &'static str {
        match self {
            CommunityFieldError::NameRequired | CommunityFieldError::NameTooLong => "name",
            CommunityFieldError::DescriptionTooLong => "description",
            CommunityFieldError::TooManyTags => "tags",
        }
    }
}

impl fmt::Display for CommunityFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommunityFieldError::NameRequired =>
                write!(f, "Community name is required"),
            CommunityFieldError::NameTooLong =>
                write!(f, "Community name must not exceed {} characters", MAX_NAME_LENGTH),
            CommunityFieldError::DescriptionTooLong =>
                write!(f, "Description must not exceed {} characters", MAX_DESCRIPTION_LENGTH),
            CommunityFieldError::TooManyTags =>
                write!(f, "Maximum {} tags are allowed", MAX_TAGS),
        }
    }
}

pub struct FieldValidator;

impl FieldValidator {
    /// Validates a community name
    ///
    /// Emptiness is checked on the trimmed name, but the length limit applies
    /// to the raw string: surrounding whitespace counts toward it.
    pub fn validate_name(name: &str) -> Option<CommunityFieldError> {
        if name.trim().is_empty() {
            return Some(CommunityFieldError::NameRequired);
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            return Some(CommunityFieldError::NameTooLong);
        }

        None
    }

    /// Validates an optional description
    ///
    /// An absent description is valid; a present one only has to fit the
    /// length limit, so the empty string passes too.
    pub fn validate_description(description: Option<&str>) -> Option<CommunityFieldError> {
        match description {
            Some(description) if description.chars().count() > MAX_DESCRIPTION_LENGTH => {
                Some(CommunityFieldError::DescriptionTooLong)
            }
            _ => None,
        }
    }

    /// Validates an optional tag list
    ///
    /// Only the tag count is checked; tag contents are left to the caller.
    pub fn validate_tags(tags: Option<&[String]>) -> Option<CommunityFieldError> {
        match tags {
            Some(tags) if tags.len() > MAX_TAGS => Some(CommunityFieldError::TooManyTags),
            _ => None,
        }
    }
}
