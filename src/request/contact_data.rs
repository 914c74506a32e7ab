use crate::domain::{ContactSubmission, EmailAddress, InvalidReason};
use serde::Deserialize;

/// Raw contact form body. Every field is optional so a missing field and an
/// empty one are rejected with the same reason.
#[derive(Deserialize, Debug, Default)]
pub struct ContactData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<ContactData> for ContactSubmission {
    type Error = InvalidReason;

    fn try_from(data: ContactData) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            required(data.name),
            required(data.email),
            required(data.subject),
            required(data.message),
        ) else {
            return Err(InvalidReason::MissingFields);
        };
        let email = EmailAddress::parse(email)?;
        Ok(ContactSubmission::new(name, email, subject, message))
    }
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
