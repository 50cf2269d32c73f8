//! Command handlers for the trade-smoke CLI

pub mod auth;
pub mod config;
pub mod run;

pub use auth::{handle_auth_command, handle_health_command};
pub use config::handle_config_command;
pub use run::{handle_list_command, handle_run_command};
