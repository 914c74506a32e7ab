use std::fmt::{Debug, Formatter};

/// Why handing a message to the mail transport failed.
#[derive(thiserror::Error)]
pub enum DispatchError {
    #[error("The mail server rejected our credentials.")]
    Authentication(#[source] anyhow::Error),

    #[error("'{0}' is not a deliverable email address.")]
    InvalidAddress(String, #[source] lettre::address::AddressError),

    #[error("Failed to build the email message.")]
    BuildMessage(#[source] lettre::error::Error),

    #[error("Failed to send the email.")]
    Transport(#[source] anyhow::Error),
}

impl DispatchError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, DispatchError::Authentication(_))
    }
}

impl Debug for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
