use std::fmt;

// Client-side input checks; all of these reject before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    UsernameRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort,
    ScoreOutOfRange,
    KeywordRequired,
    PageOutOfRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::UsernameRequired => "username is required",
            ValidationError::EmailInvalid => "email address is invalid",
            ValidationError::PasswordRequired => "password is required",
            ValidationError::PasswordTooShort => "password must be at least 8 characters",
            ValidationError::ScoreOutOfRange => "score must be between 0 and 100",
            ValidationError::KeywordRequired => "search keyword is required",
            ValidationError::PageOutOfRange => "page and pageSize must be at least 1",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}

pub fn username(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    Ok(())
}

// Shape check only; the backend owns real address verification.
pub fn email(value: &str) -> Result<(), ValidationError> {
    match value.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(ValidationError::EmailInvalid),
    }
}

pub fn password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if value.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn password_present(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

pub fn score(value: i32) -> Result<(), ValidationError> {
    if (0..=100).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::ScoreOutOfRange)
    }
}

pub fn keyword(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::KeywordRequired);
    }
    Ok(())
}

pub fn page(page: u32, page_size: u32) -> Result<(), ValidationError> {
    if page < 1 || page_size < 1 {
        return Err(ValidationError::PageOutOfRange);
    }
    Ok(())
}
