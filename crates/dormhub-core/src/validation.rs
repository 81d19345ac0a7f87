use validator::ValidationErrors;

use crate::errors::ApiError;

/// Joins field errors into one line, ordered by field name.
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Precondition(format_errors(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_format_errors_uses_messages_in_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "password",
            ValidationError::new("length").with_message("Password is required".into()),
        );
        errors.add(
            "email",
            ValidationError::new("length").with_message("Email is required".into()),
        );

        assert_eq!(
            format_errors(&errors),
            "Email is required, Password is required"
        );
    }

    #[test]
    fn test_missing_message_names_the_field() {
        let mut errors = ValidationErrors::new();
        errors.add("capacity", ValidationError::new("range"));

        let err: ApiError = errors.into();
        assert_eq!(err.user_message("fallback"), "capacity is invalid");
    }
}
