/// environment variable
pub const DEVELOPMENT_ENVIRONMENT: &str = "development";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// contact form responses
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const INVALID_EMAIL_ADDRESS: &str = "Please provide a valid email address.";
pub const MESSAGE_SENT: &str = "Message sent successfully! I will get back to you soon.";
pub const EMAIL_CONFIGURATION_ERROR: &str =
    "Email configuration error. Please contact the site administrator.";
pub const FAILED_TO_SEND_MESSAGE: &str = "Failed to send message. Please try again later.";
pub const TOO_MANY_CONTACT_ATTEMPTS: &str = "Too many contact attempts. Please try again later.";
pub const CONTACT_API_WORKING: &str = "Contact API is working!";

/// outgoing emails
pub const NOTIFICATION_SENDER_NAME: &str = "Portfolio Contact";
pub const NOTIFICATION_SUBJECT_PREFIX: &str = "New Contact: ";
pub const CONFIRMATION_SUBJECT: &str = "Thank you for contacting me!";

/// smtp reply codes meaning the server refused our credentials
pub const SMTP_AUTHENTICATION_CODES: [&str; 4] = ["454", "530", "534", "535"];
/// lettre client error raised when the server offers no usable AUTH mechanism
pub const SMTP_NO_AUTH_MECHANISM: &str = "no compatible authentication mechanism";
/// port on which smtp speaks TLS from the first byte
pub const SMTP_IMPLICIT_TLS_PORT: u16 = 465;

/// static assets
pub const FILE_NOT_FOUND: &str = "File not found.";
pub const FAILED_TO_READ_FILE: &str = "Failed to read file.";
pub const FRONTEND_INDEX: &str = "index.html";

/// rate limit response headers, lowercase as required by `HeaderName::from_static`
pub const RATE_LIMIT_LIMIT_HEADER: &str = "ratelimit-limit";
pub const RATE_LIMIT_REMAINING_HEADER: &str = "ratelimit-remaining";
pub const RATE_LIMIT_RESET_HEADER: &str = "ratelimit-reset";
