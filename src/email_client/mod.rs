mod smtp_transport;
mod templates;
mod transport;

pub use smtp_transport::SmtpMailTransport;
pub use transport::{MailTransport, OutgoingEmail};

use crate::constant::{
    CONFIRMATION_SUBJECT, NOTIFICATION_SENDER_NAME, NOTIFICATION_SUBJECT_PREFIX,
};
use crate::domain::{ContactSubmission, EmailAddress};
use crate::error::DispatchError;
use crate::utils;
use std::sync::Arc;

/// Who the confirmation email is signed by.
#[derive(Debug, Clone)]
pub struct SiteOwner {
    pub name: String,
    pub title: String,
}

pub struct EmailClient {
    transport: Arc<dyn MailTransport>,
    sender: EmailAddress,
    recipient: EmailAddress,
    owner: SiteOwner,
}

impl EmailClient {
    pub fn new(
        transport: Arc<dyn MailTransport>,
        sender: EmailAddress,
        recipient: EmailAddress,
        owner: SiteOwner,
    ) -> Self {
        EmailClient {
            transport,
            sender,
            recipient,
            owner,
        }
    }

    /// Probe the mail server once. Only logs, the service keeps running either way.
    #[tracing::instrument(name = "Verify mail server connection", skip(self))]
    pub async fn verify_connection(&self) {
        match self.transport.verify().await {
            Ok(()) => tracing::info!("Email server is ready to send messages"),
            Err(e) => tracing::error!("Email server connection failed: {:?}", e),
        }
    }

    /// Notify the owner, then confirm to the submitter.
    /// The confirmation is never attempted when the notification fails.
    #[tracing::instrument(
        name = "Dispatch contact emails",
        skip(self, submission),
        fields(submitter_email = %submission.email())
    )]
    pub async fn dispatch(&self, submission: &ContactSubmission) -> Result<(), DispatchError> {
        self.transport
            .send(self.owner_notification(submission))
            .await?;
        self.transport.send(self.confirmation(submission)).await?;
        Ok(())
    }

    fn owner_notification(&self, submission: &ContactSubmission) -> OutgoingEmail {
        let received_at = utils::received_at();
        OutgoingEmail {
            from_name: NOTIFICATION_SENDER_NAME.to_string(),
            from_address: self.sender.as_ref().to_string(),
            to: self.recipient.as_ref().to_string(),
            reply_to: Some(submission.email().to_string()),
            subject: format!("{}{}", NOTIFICATION_SUBJECT_PREFIX, submission.subject()),
            html_body: templates::owner_notification_html(submission, &received_at),
            text_body: templates::owner_notification_text(submission, &received_at),
        }
    }

    fn confirmation(&self, submission: &ContactSubmission) -> OutgoingEmail {
        OutgoingEmail {
            from_name: self.owner.name.clone(),
            from_address: self.sender.as_ref().to_string(),
            to: submission.email().to_string(),
            reply_to: None,
            subject: CONFIRMATION_SUBJECT.to_string(),
            html_body: templates::confirmation_html(submission, &self.owner),
            text_body: templates::confirmation_text(submission, &self.owner),
        }
    }
}
