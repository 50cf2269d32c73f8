//! CLI module for the trade-smoke tool
//!
//! Command structures live in the binary root; handlers live here.

pub mod commands;

pub use commands::{
    handle_auth_command, handle_config_command, handle_health_command, handle_list_command,
    handle_run_command,
};
