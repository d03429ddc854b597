pub mod public_settings;
pub mod settings;

pub use public_settings::PublicSettings;
pub use settings::{ConfigError, SettingValue, Settings, SocialLink, Theme};
