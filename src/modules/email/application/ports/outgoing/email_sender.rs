use async_trait::async_trait;

/// A fully rendered email with plain-text and HTML alternatives.
///
/// `to` and `reply_to` are RFC 5322 mailbox strings. The sender is a bare
/// address plus an optional display name, kept apart so the name needs no
/// quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub from_name: Option<String>,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), String>;
}
