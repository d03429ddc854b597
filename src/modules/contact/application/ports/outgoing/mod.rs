pub mod contact_notifier;
pub mod contact_repository;

pub use contact_notifier::{ContactNotificationError, ContactNotifier};
pub use contact_repository::{ContactRepository, ContactRepositoryError, NewContactMessage};
