pub mod contact_email_notifier;

pub use contact_email_notifier::ContactEmailNotifier;
