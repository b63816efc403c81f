//! Request validation for book writes

use indexmap::IndexMap;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::BookRequest;

/// Field name -> human readable messages, in field order
pub type FieldErrors = IndexMap<String, Vec<String>>;

/// Validation capability injected into the books service
#[cfg_attr(test, mockall::automock)]
pub trait BookValidator: Send + Sync {
    fn validate(&self, request: &BookRequest) -> Result<(), FieldErrors>;
}

/// Default rules: the title must not be blank, the author is free-form.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookRequestValidator;

impl BookValidator for BookRequestValidator {
    fn validate(&self, request: &BookRequest) -> Result<(), FieldErrors> {
        Validate::validate(request).map_err(|e| field_errors(&e))
    }
}

/// Rejects empty and whitespace-only strings
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Flatten `validator` errors into a field-error map
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut map: FieldErrors = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid ({})", field, e.code),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();
    map.sort_keys();
    map
}
