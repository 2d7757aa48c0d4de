use thiserror::Error;
use validator::ValidationErrors;

use crate::core::persistence::records::store_error::StoreError;

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("invalid `{field}`: {message}")]
    InvalidParameter { field: String, message: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RecordsError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        RecordsError::InvalidParameter {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationErrors> for RecordsError {
    /// Reports the first offending field in name order.
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        match fields.first() {
            Some((field, errs)) => {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is out of range"));
                RecordsError::invalid(field.to_string(), message)
            }
            None => RecordsError::invalid("query", "invalid query parameters"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::dto::page_request::PageRequest;
    use validator::Validate;

    #[test]
    fn reports_page_first_when_both_fields_are_invalid() {
        let errors = PageRequest::new(0, 0).validate().unwrap_err();

        match RecordsError::from(errors) {
            RecordsError::InvalidParameter { field, message } => {
                assert_eq!(field, "page");
                assert_eq!(message, "page must be a positive integer");
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn reports_the_single_invalid_field() {
        let errors = PageRequest::new(1, -4).validate().unwrap_err();

        match RecordsError::from(errors) {
            RecordsError::InvalidParameter { field, .. } => assert_eq!(field, "per_page"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}
