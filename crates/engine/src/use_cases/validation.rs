//! Common validation helpers for use cases.

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more body fields were absent or blank. Lists every required field.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(&'static [&'static str]),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A query or body parameter was absent or blank.
    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),

    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },
}

/// The value when present and not blank.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_all_required_names() {
        let err = ValidationError::MissingFields(&["prompt", "type"]);
        assert_eq!(err.to_string(), "Missing required fields: prompt, type");
    }

    #[test]
    fn missing_parameter_message() {
        assert_eq!(
            ValidationError::MissingParameter("taskId").to_string(),
            "Missing taskId parameter"
        );
    }

    #[test]
    fn blank_values_are_not_present() {
        assert_eq!(present(Some("x")), Some("x"));
        assert_eq!(present(Some("  ")), None);
        assert_eq!(present(None), None);
        assert!(require_non_empty("\t", "content").is_err());
    }
}
