use crate::domain::InvalidReason;
use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Accepts the address unchanged, no trimming or case folding.
    pub fn parse(email: String) -> Result<Self, InvalidReason> {
        if !EMAIL_PATTERN.is_match(&email) {
            return Err(InvalidReason::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
