use super::ValidationError;

/// Rejects empty passwords.
///
/// Length and complexity rules are the service's to enforce; the client
/// only refuses to send a request that cannot possibly succeed.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordEmpty);
    }

    Ok(())
}

/// Checks that the registration form's two password fields agree.
pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}
