//! Mailgun driver.
//!
//! Messages go to `POST {url}/v3/{domain}/messages` as a multipart
//! form, authenticated with basic auth (username `api`, the API key as
//! password).

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::error::MailError;
use crate::http::{FormData, HttpClient, Payload, Request, Requester};
use crate::mailer::{Mailer, Response};
use crate::transmission::Transmission;

pub struct MailgunMailer {
    cfg: Config,
    client: Box<dyn Requester>,
}

/// The documented shape of Mailgun's message-submission reply.
#[derive(Debug, Deserialize)]
struct MailgunReply {
    #[serde(default)]
    id: String,
    message: String,
}

impl MailgunMailer {
    pub fn new(cfg: Config) -> Result<Self, MailError> {
        Self::with_requester(cfg, Box::new(HttpClient::new()))
    }

    /// Bind the configuration to a caller-supplied [`Requester`].
    pub fn with_requester(cfg: Config, client: Box<dyn Requester>) -> Result<Self, MailError> {
        cfg.validate()?;
        if cfg.api_key.is_empty() {
            return Err(MailError::Config("driver requires an api key".into()));
        }
        if cfg.domain.is_empty() {
            return Err(MailError::Config("driver requires a domain".into()));
        }
        Ok(Self { cfg, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v3/{}/messages",
            self.cfg.url.trim_end_matches('/'),
            self.cfg.domain
        )
    }

    /// Optional fields are omitted entirely rather than sent
    /// empty-valued; the API rejects empty placeholders.
    fn build_form(&self, t: &Transmission) -> FormData {
        let mut form = FormData::new();
        form.add_value(
            "from",
            format!("{} <{}>", self.cfg.from_name, self.cfg.from_address),
        );
        form.add_value("subject", &t.subject);
        form.add_value("html", &t.html);
        if let Some(text) = &t.plain_text {
            form.add_value("text", text);
        }

        for to in &t.recipients {
            form.add_value("to", to);
        }

        if t.has_cc() {
            for cc in &t.cc {
                form.add_value("cc", cc);
            }
        }

        if t.has_bcc() {
            for bcc in &t.bcc {
                form.add_value("bcc", bcc);
            }
        }

        if t.has_attachments() {
            for attachment in &t.attachments {
                form.add_buffer("attachment", &attachment.filename, attachment.bytes.clone());
            }
        }

        form
    }
}

#[async_trait]
impl Mailer for MailgunMailer {
    async fn send(&self, transmission: &Transmission) -> Result<Response, MailError> {
        transmission.validate()?;

        let form = self.build_form(transmission);
        let request = Request::post(self.endpoint()).basic_auth("api", &self.cfg.api_key);

        crate::info!(
            "Sending email to {} via mailgun",
            transmission.recipients.join(", ")
        );

        let raw = self.client.execute(request, Payload::Form(form)).await?;

        if !(200..300).contains(&raw.status) {
            let message = serde_json::from_slice::<MailgunReply>(&raw.body)
                .map(|reply| reply.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&raw.body).into_owned());
            return Err(MailError::Provider {
                status: raw.status,
                message,
            });
        }

        let reply: MailgunReply = serde_json::from_slice(&raw.body)?;
        crate::debug!("Mailgun accepted message {}", reply.id);

        Ok(Response::new(raw.status, reply.message))
    }
}
