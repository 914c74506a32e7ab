use crate::configuration::EmailClientSettings;
use crate::constant::{
    SMTP_AUTHENTICATION_CODES, SMTP_IMPLICIT_TLS_PORT, SMTP_NO_AUTH_MECHANISM,
};
use crate::email_client::{MailTransport, OutgoingEmail};
use crate::error::DispatchError;
use anyhow::anyhow;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

pub struct SmtpMailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    /// Port 465 gets TLS from the first byte, every other port upgrades with STARTTLS.
    pub fn new(config: &EmailClientSettings) -> Result<Self, smtp::Error> {
        let builder = if config.smtp_port == SMTP_IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        };
        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.expose_secret().clone(),
            ))
            // timeout is a MUST option for client
            .timeout(Some(config.timeout()))
            .build();
        Ok(Self { transport })
    }
}

#[async_trait::async_trait]
impl MailTransport for SmtpMailTransport {
    async fn verify(&self) -> Result<(), DispatchError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(DispatchError::Transport(anyhow!(
                "The SMTP server did not acknowledge our connection"
            ))),
            Err(e) => Err(classify(e)),
        }
    }

    async fn send(&self, email: OutgoingEmail) -> Result<(), DispatchError> {
        let message = build_message(&email)?;
        self.transport.send(message).await.map_err(|e| {
            tracing::error!("SMTP server refused message to {}: {:?}", email.to, e);
            classify(e)
        })?;
        Ok(())
    }
}

fn classify(e: smtp::Error) -> DispatchError {
    if is_authentication_failure(&e) {
        DispatchError::Authentication(e.into())
    } else {
        DispatchError::Transport(e.into())
    }
}

fn is_authentication_failure(e: &smtp::Error) -> bool {
    let code = e.status().map(|code| code.to_string());
    let client_detail = if e.is_client() {
        Some(e.to_string())
    } else {
        None
    };
    refused_credentials(code.as_deref(), client_detail.as_deref())
}

/// Rejected credentials, or a server with no AUTH mechanism we can use.
fn refused_credentials(code: Option<&str>, client_detail: Option<&str>) -> bool {
    let rejected = code.map_or(false, |code| {
        SMTP_AUTHENTICATION_CODES.iter().any(|known| *known == code)
    });
    if rejected {
        return true;
    }
    client_detail.map_or(false, |detail| {
        detail.to_lowercase().contains(SMTP_NO_AUTH_MECHANISM)
    })
}

fn mailbox(name: Option<&str>, address: &str) -> Result<Mailbox, DispatchError> {
    let address = address
        .parse::<Address>()
        .map_err(|e| DispatchError::InvalidAddress(address.to_string(), e))?;
    Ok(Mailbox::new(name.map(str::to_string), address))
}

/// `multipart/alternative` with the plain text first, as mail clients expect.
pub(crate) fn build_message(email: &OutgoingEmail) -> Result<Message, DispatchError> {
    let mut builder = Message::builder()
        .from(mailbox(Some(&email.from_name), &email.from_address)?)
        .to(mailbox(None, &email.to)?)
        .subject(email.subject.as_str());
    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(mailbox(None, reply_to)?);
    }
    builder
        .multipart(MultiPart::alternative_plain_html(
            email.text_body.clone(),
            email.html_body.clone(),
        ))
        .map_err(DispatchError::BuildMessage)
}
