pub mod app_state_builder;
pub mod sqlite;
pub mod stubs;
