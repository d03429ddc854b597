mod app_flow;
pub mod support;
