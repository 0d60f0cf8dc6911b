use std::error::Error as StdError;
use std::fmt;

/// Errors surfaced by driver construction and sending.
///
/// Construction can only fail with [`MailError::Config`] or
/// [`MailError::MissingEnvVar`]; everything else belongs to a send.
#[derive(Debug)]
pub enum MailError {
    /// A required configuration field is missing or invalid.
    Config(String),
    /// A required transmission field is missing.
    Validation(&'static str),
    /// An environment variable required by `Config::from_env` is unset.
    MissingEnvVar(&'static str),
    /// An address could not be parsed into a mailbox.
    Address(lettre::address::AddressError),
    /// The MIME message could not be assembled.
    Build(lettre::error::Error),
    /// The transport failed before a response was received.
    Transport(Box<dyn StdError + Send + Sync>),
    /// The provider answered with a non-success status.
    Provider { status: u16, message: String },
    /// The provider's reply did not match its documented schema.
    ResponseParse(serde_json::Error),
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::Config(msg) => write!(f, "{}", msg),
            MailError::Validation(msg) => write!(f, "{}", msg),
            MailError::MissingEnvVar(var) => write!(f, "Missing environment variable: {}", var),
            MailError::Address(err) => write!(f, "Address parse error: {}", err),
            MailError::Build(err) => write!(f, "Build message error: {}", err),
            MailError::Transport(err) => write!(f, "Email send failed: {}", err),
            MailError::Provider { status, message } => {
                write!(f, "Provider returned {}: {}", status, message)
            }
            MailError::ResponseParse(err) => write!(f, "Unexpected provider response: {}", err),
        }
    }
}

impl StdError for MailError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            MailError::Address(err) => Some(err),
            MailError::Build(err) => Some(err),
            MailError::Transport(err) => Some(&**err),
            MailError::ResponseParse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<lettre::address::AddressError> for MailError {
    fn from(e: lettre::address::AddressError) -> Self {
        MailError::Address(e)
    }
}

impl From<lettre::error::Error> for MailError {
    fn from(e: lettre::error::Error) -> Self {
        MailError::Build(e)
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        MailError::Transport(Box::new(e))
    }
}

impl From<reqwest::Error> for MailError {
    fn from(e: reqwest::Error) -> Self {
        MailError::Transport(Box::new(e))
    }
}

impl From<serde_json::Error> for MailError {
    fn from(e: serde_json::Error) -> Self {
        MailError::ResponseParse(e)
    }
}
