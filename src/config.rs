//! Driver configuration.

use std::env;

use crate::error::MailError;

/// Connection parameters for a driver.
///
/// Which fields are required depends on the driver: every driver needs
/// `url`, `from_address` and `from_name`; SMTP additionally needs `port`
/// and `password`; Mailgun needs `api_key` and `domain`; SendGrid needs
/// `api_key`. For SMTP the `url` is the server hostname, for the HTTP
/// providers it is the API base URL. Validated once when the driver is
/// constructed and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub url: String,
    pub port: u16,
    pub from_address: String,
    pub from_name: String,
    pub password: String,
    pub api_key: String,
    pub domain: String,
}

impl Config {
    /// Generic required-field checks shared by all drivers.
    pub fn validate(&self) -> Result<(), MailError> {
        if self.url.is_empty() {
            return Err(MailError::Config("driver requires a url".into()));
        }
        if self.from_address.is_empty() {
            return Err(MailError::Config("driver requires a from address".into()));
        }
        if self.from_name.is_empty() {
            return Err(MailError::Config("driver requires a from name".into()));
        }
        Ok(())
    }

    /// Load a configuration from `MAILBRIDGE_*` environment variables.
    ///
    /// `MAILBRIDGE_URL`, `MAILBRIDGE_FROM_ADDRESS` and
    /// `MAILBRIDGE_FROM_NAME` are required. `MAILBRIDGE_PORT` defaults
    /// to 587; `MAILBRIDGE_PASSWORD`, `MAILBRIDGE_API_KEY` and
    /// `MAILBRIDGE_DOMAIN` default to empty and are checked by the
    /// driver that needs them.
    pub fn from_env() -> Result<Self, MailError> {
        let url = env::var("MAILBRIDGE_URL").map_err(|_| MailError::MissingEnvVar("MAILBRIDGE_URL"))?;
        let from_address = env::var("MAILBRIDGE_FROM_ADDRESS")
            .map_err(|_| MailError::MissingEnvVar("MAILBRIDGE_FROM_ADDRESS"))?;
        let from_name = env::var("MAILBRIDGE_FROM_NAME")
            .map_err(|_| MailError::MissingEnvVar("MAILBRIDGE_FROM_NAME"))?;
        let port = env::var("MAILBRIDGE_PORT")
            .unwrap_or_else(|_| "587".into())
            .parse()
            .map_err(|_| MailError::Config("Invalid MAILBRIDGE_PORT".into()))?;

        Ok(Self {
            url,
            port,
            from_address,
            from_name,
            password: env::var("MAILBRIDGE_PASSWORD").unwrap_or_default(),
            api_key: env::var("MAILBRIDGE_API_KEY").unwrap_or_default(),
            domain: env::var("MAILBRIDGE_DOMAIN").unwrap_or_default(),
        })
    }
}
