//! Outbound HTTP plumbing shared by the API drivers.
//!
//! Drivers describe a call as a [`Request`] plus a [`Payload`] and hand
//! it to a [`Requester`]. [`HttpClient`] is the reqwest-backed
//! implementation; tests substitute their own.

use async_trait::async_trait;
use reqwest::{Method, multipart};

use crate::error::MailError;

/// A multipart form body under construction.
///
/// Values and buffers stay inspectable until the request is executed,
/// so payload construction can be asserted on without a network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: Vec<(String, String)>,
    buffers: Vec<FormBuffer>,
}

/// A named file buffer inside a [`FormData`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBuffer {
    pub field: String,
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.push((name.into(), value.into()));
    }

    /// Add a file buffer. The content type is guessed from the
    /// filename, falling back to `application/octet-stream`.
    pub fn add_buffer(&mut self, name: impl Into<String>, filename: impl Into<String>, bytes: Vec<u8>) {
        let filename = filename.into();
        let content_type = mime_guess::from_path(&filename)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        self.buffers.push(FormBuffer {
            field: name.into(),
            filename,
            content_type,
            bytes,
        });
    }

    pub fn values(&self) -> &[(String, String)] {
        &self.values
    }

    pub fn buffers(&self) -> &[FormBuffer] {
        &self.buffers
    }

    fn into_multipart(self) -> Result<multipart::Form, MailError> {
        let mut form = multipart::Form::new();
        for (name, value) in self.values {
            form = form.text(name, value);
        }
        for buffer in self.buffers {
            let part = multipart::Part::bytes(buffer.bytes)
                .file_name(buffer.filename)
                .mime_str(&buffer.content_type)?;
            form = form.part(buffer.field, part);
        }
        Ok(form)
    }
}

/// A generic outbound request: method, URL and authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub basic_auth: Option<(String, String)>,
    pub bearer: Option<String>,
}

impl Request {
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            basic_auth: None,
            bearer: None,
        }
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// The request body a driver sends.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Form(FormData),
    Json(serde_json::Value),
}

/// Raw reply from the provider, before driver-specific mapping.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The narrow outbound contract the drivers depend on: one request in,
/// one raw response out. Transport failures surface as
/// [`MailError::Transport`].
#[async_trait]
pub trait Requester: Send + Sync {
    async fn execute(&self, request: Request, payload: Payload) -> Result<RawResponse, MailError>;
}

/// Reqwest-backed [`Requester`]. The inner client is cheap to clone and
/// safe for concurrent use; timeouts and cancellation are its business.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Requester for HttpClient {
    async fn execute(&self, request: Request, payload: Payload) -> Result<RawResponse, MailError> {
        let mut builder = self.inner.request(request.method, &request.url);

        if let Some((username, password)) = request.basic_auth {
            builder = builder.basic_auth(username, Some(password));
        }
        if let Some(token) = request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match payload {
            Payload::Form(form) => builder.multipart(form.into_multipart()?),
            Payload::Json(value) => builder.json(&value),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
