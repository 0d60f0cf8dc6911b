//! SMTP driver built on top of `lettre`.

use std::error::Error as StdError;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use crate::config::Config;
use crate::error::MailError;
use crate::mailer::{Mailer, Response};
use crate::transmission::Transmission;

/// Sends mail over SMTP.
///
/// The transport is built once at construction: implicit TLS for port
/// 465, STARTTLS otherwise, authenticating with the from address and
/// password. Generic over the lettre transport so tests can inject a
/// stub via [`SmtpMailer::with_transport`].
pub struct SmtpMailer<T = AsyncSmtpTransport<Tokio1Executor>> {
    cfg: Config,
    transport: T,
}

impl SmtpMailer {
    pub fn new(cfg: Config) -> Result<Self, MailError> {
        cfg.validate()?;
        if cfg.port == 0 {
            return Err(MailError::Config("driver requires a port".into()));
        }
        if cfg.password.is_empty() {
            return Err(MailError::Config("driver requires a password".into()));
        }

        let creds = Credentials::new(cfg.from_address.clone(), cfg.password.clone());
        let builder = if cfg.port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.url)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.url)?
        };
        let transport = builder.credentials(creds).port(cfg.port).build();

        crate::info!("SMTP mailer initialized for {}", cfg.from_address);

        Ok(Self { cfg, transport })
    }
}

impl<T> SmtpMailer<T> {
    /// Bind the configuration to a caller-supplied transport.
    ///
    /// Only the generic configuration checks run here; port and
    /// password belong to the default transport.
    pub fn with_transport(cfg: Config, transport: T) -> Result<Self, MailError> {
        cfg.validate()?;
        Ok(Self { cfg, transport })
    }

    fn build_message(&self, t: &Transmission) -> Result<Message, MailError> {
        let from = Mailbox::new(
            Some(self.cfg.from_name.clone()),
            self.cfg.from_address.parse()?,
        );

        let mut builder = Message::builder().from(from).subject(&t.subject);
        for to in &t.recipients {
            builder = builder.to(to.parse::<Mailbox>()?);
        }
        for cc in &t.cc {
            builder = builder.cc(cc.parse::<Mailbox>()?);
        }
        for bcc in &t.bcc {
            builder = builder.bcc(bcc.parse::<Mailbox>()?);
        }

        let message = if t.has_attachments() {
            let mut mixed = match &t.plain_text {
                Some(text) => MultiPart::mixed().multipart(Self::alternative(text, &t.html)),
                None => MultiPart::mixed().singlepart(SinglePart::html(t.html.clone())),
            };
            for attachment in &t.attachments {
                let content_type = ContentType::parse(&attachment.content_type())
                    .map_err(|_| MailError::Validation("invalid attachment content type"))?;
                mixed = mixed.singlepart(
                    lettre::message::Attachment::new(attachment.filename.clone())
                        .body(attachment.bytes.clone(), content_type),
                );
            }
            builder.multipart(mixed)?
        } else {
            match &t.plain_text {
                Some(text) => builder.multipart(Self::alternative(text, &t.html))?,
                None => builder.singlepart(SinglePart::html(t.html.clone()))?,
            }
        };

        Ok(message)
    }

    fn alternative(text: &str, html: &str) -> MultiPart {
        MultiPart::alternative()
            .singlepart(SinglePart::plain(text.to_string()))
            .singlepart(SinglePart::html(html.to_string()))
    }
}

#[async_trait]
impl<T> Mailer for SmtpMailer<T>
where
    T: AsyncTransport + Send + Sync,
    T::Error: StdError + Send + Sync + 'static,
{
    async fn send(&self, transmission: &Transmission) -> Result<Response, MailError> {
        transmission.validate()?;

        crate::info!(
            "Sending email to {} over smtp",
            transmission.recipients.join(", ")
        );

        let message = self.build_message(transmission)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(Box::new(e)))?;

        Ok(Response::new(200, "Email sent successfully"))
    }
}
