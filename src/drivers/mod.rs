//! Provider-specific implementations of the send capability.

mod mailgun;
mod sendgrid;
mod smtp;

pub use mailgun::MailgunMailer;
pub use sendgrid::SendGridMailer;
pub use smtp::SmtpMailer;
