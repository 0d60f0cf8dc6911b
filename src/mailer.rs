//! The send capability, the driver selector and the client factory.

use async_trait::async_trait;

use crate::config::Config;
use crate::drivers::{MailgunMailer, SendGridMailer, SmtpMailer};
use crate::error::MailError;
use crate::transmission::Transmission;

/// Normalized result of a successful send.
///
/// On failure no response is produced; a [`MailError`] is returned
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status_code: u16,
    pub message: String,
}

impl Response {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }
}

/// The single capability every driver implements.
///
/// `send` validates the transmission, builds the provider payload,
/// performs one network exchange and normalizes the result. Errors are
/// returned to the caller; nothing is retried or logged away
/// internally.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, transmission: &Transmission) -> Result<Response, MailError>;
}

/// The closed set of supported backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Smtp,
    Mailgun,
    SendGrid,
}

/// Construct the driver for `driver`, validating `config` first.
///
/// No network I/O happens here; transport handles are created but not
/// connected.
pub fn new_client(driver: Driver, config: Config) -> Result<Box<dyn Mailer>, MailError> {
    match driver {
        Driver::Smtp => Ok(Box::new(SmtpMailer::new(config)?)),
        Driver::Mailgun => Ok(Box::new(MailgunMailer::new(config)?)),
        Driver::SendGrid => Ok(Box::new(SendGridMailer::new(config)?)),
    }
}
