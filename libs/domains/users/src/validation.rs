//! Shape checks for incoming create requests.
//!
//! Both rules are always evaluated, so an empty name reports two violations.

use validator::Validate;

use crate::models::CreateUserRequest;

pub const EMPTY_FULL_NAME: &str = "Full name cannot be null or empty";
pub const SHORT_FULL_NAME: &str = "Full name must be greater than 3 letter";

/// Collect every violation for `request`; an empty list means it is valid
pub fn validate_create_user(request: &CreateUserRequest) -> Vec<String> {
    let mut violations = Vec::new();

    if request.full_name.trim().is_empty() {
        violations.push(EMPTY_FULL_NAME.to_string());
    }

    // Length is declared on the DTO so the derived rule and the OpenAPI
    // schema agree.
    if let Err(errors) = request.validate() {
        violations.extend(
            errors
                .field_errors()
                .values()
                .flat_map(|field| field.iter())
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| SHORT_FULL_NAME.to_string())
                }),
        );
    }

    violations
}
