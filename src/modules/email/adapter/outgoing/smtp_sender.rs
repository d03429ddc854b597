use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::Address;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tokio::sync::OnceCell;
use tracing::info;

use crate::modules::email::application::ports::outgoing::{EmailSender, OutgoingEmail};
use crate::modules::settings::application::settings::MailSettings;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

type MailerFactory = Box<dyn Fn() -> Result<Box<dyn Mailer>, String> + Send + Sync>;

/// SMTP delivery through a transport built on first use.
///
/// Concurrent first sends share a single build; a failed build is retried
/// on the next send.
pub struct SmtpEmailSender {
    factory: MailerFactory,
    mailer: OnceCell<Box<dyn Mailer>>,
}

fn build_transport(mail: &MailSettings) -> Result<Box<dyn Mailer>, String> {
    let tls_parameters =
        TlsParameters::new(mail.smtp_host.clone()).map_err(|e| e.to_string())?;
    let tls = if mail.smtp_secure {
        Tls::Wrapper(tls_parameters)
    } else {
        Tls::Opportunistic(tls_parameters)
    };

    let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&mail.smtp_host)
        .port(mail.smtp_port)
        .tls(tls)
        .credentials(Credentials::new(
            mail.smtp_user.clone(),
            mail.smtp_password.clone(),
        ))
        .timeout(Some(Duration::from_secs(mail.smtp_timeout_secs)))
        .build();

    info!(
        host = %mail.smtp_host,
        port = mail.smtp_port,
        secure = mail.smtp_secure,
        "SMTP transport ready"
    );

    Ok(Box::new(transport))
}

fn mailbox(field: &str, raw: &str) -> Result<Mailbox, String> {
    raw.parse::<Mailbox>()
        .map_err(|e| format!("Invalid {field} address {raw:?}: {e}"))
}

fn sender_mailbox(name: Option<String>, address: &str) -> Result<Mailbox, String> {
    let address = address
        .parse::<Address>()
        .map_err(|e| format!("Invalid from address {address:?}: {e}"))?;
    Ok(Mailbox::new(name, address))
}

impl SmtpEmailSender {
    pub fn new(mail: &MailSettings) -> Self {
        let mail = mail.clone();
        Self::with_factory(move || build_transport(&mail))
    }

    pub fn new_with_mailer(mailer: Box<dyn Mailer>) -> Self {
        Self {
            factory: Box::new(|| Err("mailer already provided".to_string())),
            mailer: OnceCell::new_with(Some(mailer)),
        }
    }

    pub fn with_factory<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Mailer>, String> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            mailer: OnceCell::new(),
        }
    }

    async fn mailer(&self) -> Result<&dyn Mailer, String> {
        let mailer = self
            .mailer
            .get_or_try_init(|| async { (self.factory)() })
            .await?;
        Ok(&**mailer)
    }
}

fn build_message(email: OutgoingEmail) -> Result<Message, String> {
    let mut builder = Message::builder()
        .from(sender_mailbox(email.from_name, &email.from)?)
        .to(mailbox("to", &email.to)?)
        .subject(email.subject);

    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(mailbox("reply-to", reply_to)?);
    }

    builder
        .multipart(MultiPart::alternative_plain_html(email.text, email.html))
        .map_err(|e| e.to_string())
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), String> {
        let message = build_message(email)?;

        self.mailer().await?.send(message).await
    }
}
