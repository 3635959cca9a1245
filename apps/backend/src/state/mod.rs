pub mod app_state;
pub mod round_store;
pub mod security_config;
