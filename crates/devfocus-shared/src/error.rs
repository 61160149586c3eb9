use thiserror::Error;

/// Malformed input rejected before it reaches a collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("Duration must be a positive number of minutes")]
    NonPositiveDuration,

    #[error("Message is too long: {len} characters (max {max})")]
    ContentTooLong { len: usize, max: usize },
}

/// Reject a required text field that is empty or only whitespace.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(
            require_text("title", "   "),
            Err(ValidationError::EmptyField { field: "title" })
        );
        assert!(require_text("title", "Ship it").is_ok());
    }
}
