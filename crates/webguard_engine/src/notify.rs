use std::time::Duration;

use chrono::Local;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::{NotifyError, NotifyFailure};

/// Subject line of every change alert.
pub const ALERT_SUBJECT: &str = "WebGuard Alert - Content Changed";

/// Plain-text alert body: capture time plus the full new content.
pub fn alert_body(new_content: &str) -> String {
    format!(
        "Website Change Detected\n\nTime: {}\n\nNew Content:\n{}\n",
        Local::now().to_rfc3339(),
        new_content
    )
}

/// Narrow alert contract consumed by the monitor cycle.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, new_content: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    /// Mail account used as both sender and recipient.
    pub account: String,
    pub credential: String,
    /// Bound on the whole SMTP round trip; exceeding it is a transport fault.
    pub send_timeout: Duration,
}

impl SmtpSettings {
    pub fn new(host: impl Into<String>, account: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            account: account.into(),
            credential: credential.into(),
            send_timeout: Duration::from_secs(30),
        }
    }
}

/// Sends change alerts over authenticated SMTP (STARTTLS).
#[derive(Debug)]
pub struct SmtpNotifier {
    mailbox: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
    send_timeout: Duration,
}

impl SmtpNotifier {
    /// Builds the transport and validates the account address eagerly so a
    /// malformed address fails at startup, not on the first detected change.
    pub fn new(settings: SmtpSettings) -> Result<Self, NotifyError> {
        let mailbox: Mailbox = settings
            .account
            .parse()
            .map_err(|err: lettre::address::AddressError| {
                NotifyError::new(NotifyFailure::Message, err.to_string())
            })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|err| NotifyError::new(NotifyFailure::Transport, err.to_string()))?
            .credentials(Credentials::new(
                settings.account.clone(),
                settings.credential.clone(),
            ))
            .build();

        Ok(Self {
            mailbox,
            transport,
            send_timeout: settings.send_timeout,
        })
    }

    fn build_message(&self, new_content: &str) -> Result<Message, NotifyError> {
        Message::builder()
            .from(self.mailbox.clone())
            .to(self.mailbox.clone())
            .subject(ALERT_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(alert_body(new_content))
            .map_err(|err| NotifyError::new(NotifyFailure::Message, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, new_content: &str) -> Result<(), NotifyError> {
        let message = self.build_message(new_content)?;

        let send = self.transport.send(message);
        match tokio::time::timeout(self.send_timeout, send).await {
            Ok(Ok(_response)) => Ok(()),
            Ok(Err(err)) => Err(map_smtp_error(err)),
            Err(_elapsed) => Err(NotifyError::new(
                NotifyFailure::Timeout,
                format!("send exceeded {:?}", self.send_timeout),
            )),
        }
    }
}

fn map_smtp_error(err: lettre::transport::smtp::Error) -> NotifyError {
    // Permanent SMTP rejections on this send-to-self flow are credential
    // failures; everything else is a connection or protocol fault.
    let kind = if err.is_permanent() {
        NotifyFailure::Auth
    } else {
        NotifyFailure::Transport
    };
    NotifyError::new(kind, err.to_string())
}
