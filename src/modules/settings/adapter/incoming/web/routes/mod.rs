mod get_config;

pub use get_config::*;
