use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::{
    ContactNotificationError, ContactNotifier,
};
use crate::modules::contact::domain::ContactMessage;
use crate::modules::email::application::ports::outgoing::{EmailSender, OutgoingEmail};
use crate::modules::settings::application::Settings;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Mails the site owner a copy of each contact message.
///
/// Sent from the SMTP account under the portal title, with Reply-To set to
/// the visitor so the owner can answer directly.
pub struct ContactEmailNotifier {
    sender: Arc<dyn EmailSender>,
    from: String,
    from_name: String,
    to: String,
    subject: String,
}

impl ContactEmailNotifier {
    pub fn new(sender: Arc<dyn EmailSender>, settings: &Settings) -> Self {
        let mail = &settings.mail;
        let to = if mail.contact_email_recipient.is_empty() {
            mail.smtp_user.clone()
        } else {
            mail.contact_email_recipient.clone()
        };

        Self {
            sender,
            from: mail.smtp_user.clone(),
            from_name: settings.site.portal_title.clone(),
            to,
            subject: mail.contact_email_subject.clone(),
        }
    }

    pub fn render(&self, message: &ContactMessage) -> OutgoingEmail {
        let text = format!(
            "You have a new message from {} ({}).\n\nMessage:\n{}",
            message.name, message.email, message.message
        );

        let html = format!(
            "<p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Message:</strong></p>\n\
             <p style=\"white-space: pre-wrap; font-family: system-ui, sans-serif;\">{}</p>",
            escape_html(&message.name),
            escape_html(&message.email),
            escape_html(&message.message),
        );

        OutgoingEmail {
            from: self.from.clone(),
            from_name: Some(self.from_name.clone()).filter(|name| !name.trim().is_empty()),
            to: self.to.clone(),
            reply_to: Some(message.email.clone()),
            subject: self.subject.clone(),
            text,
            html,
        }
    }
}

#[async_trait]
impl ContactNotifier for ContactEmailNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactNotificationError> {
        self.sender
            .send_email(self.render(message))
            .await
            .map_err(ContactNotificationError::EmailSendingFailed)
    }
}
