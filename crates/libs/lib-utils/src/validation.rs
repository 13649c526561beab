//! # Validation Utilities
//!
//! Input validation helpers for the lead forms.

/// Validate that a string is not blank.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field_name))
    } else {
        Ok(())
    }
}

/// Validate a required email address (surrounding whitespace ignored).
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if !is_basic_email(email) {
        return Err("Email format looks invalid".to_string());
    }
    Ok(())
}

/// Basic `local@domain.tld` shape check.
///
/// Accepts exactly what `^\S+@\S+\.\S+$` accepts: no whitespace, some `@` with at
/// least one character before it, and a `.` after that `@` with at least one
/// character on each side.
pub fn is_basic_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    // The earliest usable `@` leaves the most room for the domain part.
    let Some(at) = value.char_indices().skip(1).find(|&(_, c)| c == '@').map(|(i, _)| i) else {
        return false;
    };

    let domain = &value[at + 1..];
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
