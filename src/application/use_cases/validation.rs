use crate::domain::{DomainError, FieldUpdate};

/// Rejects values that are empty once surrounding whitespace is removed.
pub(crate) fn require_text(value: &str, message: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_input(message));
    }
    Ok(())
}

/// Same as [`require_text`], applied only when the field is present.
pub(crate) fn require_text_if_set(
    field: &FieldUpdate<String>,
    message: &str,
) -> Result<(), DomainError> {
    match field.as_set() {
        Some(value) => require_text(value, message),
        None => Ok(()),
    }
}
