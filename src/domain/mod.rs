mod contact_submission;
mod email_address;

pub use contact_submission::{ContactSubmission, InvalidReason};
pub use email_address::EmailAddress;
