//! SendGrid driver.
//!
//! Messages go to `POST {url}/v3/mail/send` as a JSON body with bearer
//! authentication. SendGrid answers 202 with an empty body on success,
//! so the driver returns a fixed confirmation message; failures carry a
//! JSON array of error messages.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::MailError;
use crate::http::{HttpClient, Payload, Request, Requester};
use crate::mailer::{Mailer, Response};
use crate::transmission::Transmission;

pub struct SendGridMailer {
    cfg: Config,
    client: Box<dyn Requester>,
}

#[derive(Debug, Serialize)]
struct SendGridMessage {
    personalizations: Vec<Personalization>,
    from: EmailAddress,
    subject: String,
    content: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<SendGridAttachment>>,
}

#[derive(Debug, Serialize)]
struct Personalization {
    to: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cc: Option<Vec<EmailAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bcc: Option<Vec<EmailAddress>>,
}

#[derive(Debug, Serialize)]
struct EmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(rename = "type")]
    kind: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct SendGridAttachment {
    content: String,
    filename: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct SendGridErrors {
    errors: Vec<SendGridErrorItem>,
}

#[derive(Debug, Deserialize)]
struct SendGridErrorItem {
    message: String,
}

fn address(email: &str) -> EmailAddress {
    EmailAddress {
        email: email.to_string(),
        name: None,
    }
}

impl SendGridMailer {
    pub fn new(cfg: Config) -> Result<Self, MailError> {
        Self::with_requester(cfg, Box::new(HttpClient::new()))
    }

    /// Bind the configuration to a caller-supplied [`Requester`].
    pub fn with_requester(cfg: Config, client: Box<dyn Requester>) -> Result<Self, MailError> {
        cfg.validate()?;
        if cfg.api_key.is_empty() {
            return Err(MailError::Config("driver requires an api key".into()));
        }
        Ok(Self { cfg, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/v3/mail/send", self.cfg.url.trim_end_matches('/'))
    }

    fn build_message(&self, t: &Transmission) -> SendGridMessage {
        // text/plain must precede text/html in the content array.
        let mut content = Vec::new();
        if let Some(text) = &t.plain_text {
            content.push(Content {
                kind: "text/plain".into(),
                value: text.clone(),
            });
        }
        content.push(Content {
            kind: "text/html".into(),
            value: t.html.clone(),
        });

        let attachments = if t.has_attachments() {
            Some(
                t.attachments
                    .iter()
                    .map(|a| SendGridAttachment {
                        content: STANDARD.encode(&a.bytes),
                        filename: a.filename.clone(),
                        kind: a.content_type(),
                    })
                    .collect(),
            )
        } else {
            None
        };

        SendGridMessage {
            personalizations: vec![Personalization {
                to: t.recipients.iter().map(|r| address(r)).collect(),
                cc: t.has_cc().then(|| t.cc.iter().map(|c| address(c)).collect()),
                bcc: t.has_bcc().then(|| t.bcc.iter().map(|b| address(b)).collect()),
            }],
            from: EmailAddress {
                email: self.cfg.from_address.clone(),
                name: Some(self.cfg.from_name.clone()),
            },
            subject: t.subject.clone(),
            content,
            attachments,
        }
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, transmission: &Transmission) -> Result<Response, MailError> {
        transmission.validate()?;

        let body = serde_json::to_value(self.build_message(transmission))?;
        let request = Request::post(self.endpoint()).bearer(&self.cfg.api_key);

        crate::info!(
            "Sending email to {} via sendgrid",
            transmission.recipients.join(", ")
        );

        let raw = self.client.execute(request, Payload::Json(body)).await?;

        if !(200..300).contains(&raw.status) {
            let message = serde_json::from_slice::<SendGridErrors>(&raw.body)
                .map(|e| {
                    e.errors
                        .into_iter()
                        .map(|item| item.message)
                        .collect::<Vec<_>>()
                        .join("; ")
                })
                .unwrap_or_else(|_| String::from_utf8_lossy(&raw.body).into_owned());
            return Err(MailError::Provider {
                status: raw.status,
                message,
            });
        }

        Ok(Response::new(raw.status, "Email sent successfully"))
    }
}
