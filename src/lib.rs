//! A unified email-sending client.
//!
//! One [`Mailer`] trait abstracts over multiple transport backends:
//! SMTP (via `lettre`) and HTTP providers such as Mailgun and SendGrid
//! (via `reqwest`). Build a [`Transmission`], obtain a driver from
//! [`new_client`], and call [`Mailer::send`].
//!
//! ```rust,ignore
//! use mailbridge::{new_client, Config, Driver, Transmission};
//!
//! let cfg = Config {
//!     url: "https://api.mailgun.net".into(),
//!     from_address: "noreply@example.com".into(),
//!     from_name: "Example".into(),
//!     api_key: "key-xxxx".into(),
//!     domain: "example.com".into(),
//!     ..Default::default()
//! };
//!
//! let mailer = new_client(Driver::Mailgun, cfg)?;
//!
//! let tx = Transmission::new()
//!     .recipient("user@example.com")
//!     .subject("Hello")
//!     .html("<h1>Hello from mailbridge!</h1>")
//!     .text("Hello from mailbridge!");
//!
//! let response = mailer.send(&tx).await?;
//! println!("{}: {}", response.status_code, response.message);
//! ```

pub mod config;
pub mod drivers;
pub mod error;
pub mod http;
pub mod mailer;
pub mod simple_logger;
pub mod transmission;

pub use config::Config;
pub use error::MailError;
pub use mailer::{Driver, Mailer, Response, new_client};
pub use simple_logger::SimpleLogger;
pub use transmission::{Attachment, Transmission};
