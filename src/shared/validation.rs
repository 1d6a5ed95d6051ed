//! Field validation helpers
//!
//! Small predicates used by the request types' `validate` methods.

use crate::shared::error::SharedError;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Fail with `message` when `value` is empty or whitespace only
pub fn require_non_empty(field: &str, value: &str, message: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, message));
    }
    Ok(())
}

/// Basic email shape check: `local@domain.tld`, no whitespace
///
/// Intentionally loose; deliverability is not our problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Password length check, counted in characters rather than bytes
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}
