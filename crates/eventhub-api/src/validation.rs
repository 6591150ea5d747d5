//! Input validation utilities for EventHub API requests
//!
//! Pre-submit checks run on the client before any network call is issued.

use validator::ValidationError;

/// Maximum resume file size (10MB)
pub const MAX_RESUME_SIZE: usize = 10 * 1024 * 1024;

/// Maximum length for email field
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length for password field
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// MIME types accepted for a resume upload
pub const ALLOWED_RESUME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// File extensions accepted for a resume upload
pub const ALLOWED_RESUME_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx"];

/// Validate a resume file before upload
///
/// A resume must:
/// - Have a non-empty filename with an allowed extension (.pdf, .doc, .docx)
/// - Carry an allowed MIME type (PDF or Word)
/// - Not exceed MAX_RESUME_SIZE bytes
pub fn validate_resume(
    filename: &str,
    content_type: &str,
    size: usize,
) -> Result<(), ValidationError> {
    if filename.is_empty() {
        return Err(ValidationError::new("resume_missing"));
    }
    let lower = filename.to_lowercase();
    if !ALLOWED_RESUME_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
    {
        return Err(ValidationError::new("resume_bad_extension"));
    }
    if !ALLOWED_RESUME_TYPES.contains(&content_type) {
        return Err(ValidationError::new("resume_bad_type"));
    }
    if size > MAX_RESUME_SIZE {
        return Err(ValidationError::new("resume_too_large"));
    }
    Ok(())
}

/// Validate registration/login credentials
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("email_empty"));
    }
    if email.len() > MAX_EMAIL_LENGTH || !email.contains('@') {
        return Err(ValidationError::new("email_invalid"));
    }
    if password.is_empty() {
        return Err(ValidationError::new("password_empty"));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::new("password_too_long"));
    }
    Ok(())
}
