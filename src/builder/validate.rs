use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// Optional leading + and country-code digit, then 10-14 digits.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?1?\d{10,14}$").unwrap());

/// Field rules take an already-trimmed value and explain the rejection.
pub type Rule = fn(&str) -> Result<(), String>;

pub fn validate_name(value: &str) -> Result<(), String> {
    let len = value.chars().count();
    if len < 2 || len > 50 {
        return Err(format!("must be 2-50 characters, got {}", len));
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), String> {
    if !EMAIL_RE.is_match(value) {
        return Err("not a valid email address".to_string());
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), String> {
    if !PHONE_RE.is_match(value) {
        return Err("expected 10-14 digits with an optional leading +".to_string());
    }
    Ok(())
}

pub fn validate_required(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("must not be empty".to_string());
    }
    Ok(())
}
