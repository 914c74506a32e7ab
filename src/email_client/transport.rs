use crate::error::DispatchError;

/// One message, independent of how it travels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from_name: String,
    pub from_address: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Anything able to deliver an [`OutgoingEmail`].
///
/// The production implementation speaks SMTP; tests plug in a recorder.
#[async_trait::async_trait]
pub trait MailTransport: Send + Sync {
    /// Check the mail server is reachable and accepts our credentials.
    async fn verify(&self) -> Result<(), DispatchError>;

    async fn send(&self, email: OutgoingEmail) -> Result<(), DispatchError>;
}
