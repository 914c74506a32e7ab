use crate::constant::{ALL_FIELDS_REQUIRED, INVALID_EMAIL_ADDRESS};
use crate::domain::EmailAddress;

/// A validated contact form payload. Lives for one request only.
#[derive(Debug)]
pub struct ContactSubmission {
    name: String,
    email: EmailAddress,
    subject: String,
    message: String,
}

impl ContactSubmission {
    pub fn new(name: String, email: EmailAddress, subject: String, message: String) -> Self {
        Self {
            name,
            email,
            subject,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        self.email.as_ref()
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message with line breaks turned into `<br>`. Nothing else is escaped.
    pub fn message_as_html(&self) -> String {
        self.message.replace('\n', "<br>")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidReason {
    #[error("{}", ALL_FIELDS_REQUIRED)]
    MissingFields,

    #[error("{}", INVALID_EMAIL_ADDRESS)]
    InvalidEmail,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::MissingFields => ALL_FIELDS_REQUIRED,
            InvalidReason::InvalidEmail => INVALID_EMAIL_ADDRESS,
        }
    }
}
