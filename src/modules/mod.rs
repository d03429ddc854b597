pub mod contact;
pub mod content;
pub mod email;
pub mod settings;
