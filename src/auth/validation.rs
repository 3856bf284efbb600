//! Input validation for member signup.
//!
//! Usernames are 4-10 lowercase letters or digits. Passwords are 8-15
//! characters drawn from ASCII letters, digits and printable symbols.

use thiserror::Error;

/// Minimum username length.
pub const MIN_USERNAME_LENGTH: usize = 4;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 10;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 15;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Username length out of range.
    #[error("아이디는 {MIN_USERNAME_LENGTH}자 이상 {MAX_USERNAME_LENGTH}자 이하여야 합니다.")]
    UsernameLength,

    /// Username contains characters other than lowercase letters and digits.
    #[error("아이디는 알파벳 소문자와 숫자로만 구성되어야 합니다.")]
    UsernameInvalidChars,

    /// Password length out of range.
    #[error("비밀번호는 {MIN_PASSWORD_LENGTH}자 이상 {MAX_PASSWORD_LENGTH}자 이하여야 합니다.")]
    PasswordLength,

    /// Password contains whitespace, control or non-ASCII characters.
    #[error("비밀번호는 알파벳 대소문자, 숫자, 특수문자로만 구성되어야 합니다.")]
    PasswordInvalidChars,
}

/// Validate a username.
///
/// # Examples
///
/// ```
/// use freeboard::auth::validation::validate_username;
///
/// assert!(validate_username("alice01").is_ok());
/// assert!(validate_username("abc").is_err());
/// assert!(validate_username("Alice").is_err());
/// ```
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(ValidationError::UsernameLength);
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(ValidationError::UsernameInvalidChars);
    }

    Ok(())
}

/// Validate a signup password.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) {
        return Err(ValidationError::PasswordLength);
    }

    // ascii_graphic: letters, digits and punctuation; no space
    if !password.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ValidationError::PasswordInvalidChars);
    }

    Ok(())
}
