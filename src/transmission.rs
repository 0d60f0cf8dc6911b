//! The provider-agnostic email request.

use crate::error::MailError;

/// A single email send request, independent of any provider.
///
/// Recipients, a subject and an HTML body are required; everything else
/// is optional. Fields are public so a transmission can be written as a
/// struct literal, and the chainable setters cover the incremental case.
/// Validation runs when a driver sends, not at construction, so a
/// transmission can be built up in stages.
#[derive(Debug, Clone, Default)]
pub struct Transmission {
    pub recipients: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub html: String,
    pub plain_text: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl Transmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipient.
    pub fn recipient(mut self, addr: impl Into<String>) -> Self {
        self.recipients.push(addr.into());
        self
    }

    /// Add a CC recipient.
    pub fn cc(mut self, addr: impl Into<String>) -> Self {
        self.cc.push(addr.into());
        self
    }

    /// Add a BCC recipient.
    pub fn bcc(mut self, addr: impl Into<String>) -> Self {
        self.bcc.push(addr.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    /// Set the plain-text alternative body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.plain_text = Some(text.into());
        self
    }

    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Sanity checks run by every driver before any network activity.
    pub fn validate(&self) -> Result<(), MailError> {
        if self.recipients.is_empty() {
            return Err(MailError::Validation("transmission requires recipients"));
        }
        if self.subject.is_empty() {
            return Err(MailError::Validation("transmission requires a subject"));
        }
        if self.html.is_empty() {
            return Err(MailError::Validation("transmission requires html content"));
        }
        Ok(())
    }

    /// Whether any CC recipients are attached.
    pub fn has_cc(&self) -> bool {
        !self.cc.is_empty()
    }

    /// Whether any BCC recipients are attached.
    pub fn has_bcc(&self) -> bool {
        !self.bcc.is_empty()
    }

    /// Whether any attachments are attached.
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

/// A file attached to a transmission: a filename and its raw bytes.
/// No size or content checks are performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Content type guessed from the filename extension, falling back
    /// to `application/octet-stream`.
    pub fn content_type(&self) -> String {
        mime_guess::from_path(&self.filename)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}
