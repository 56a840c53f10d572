// File: nitrobot-core/src/services/mod.rs

pub mod command_service;
pub mod credentials;
pub mod response;
pub mod server_commands;

pub use command_service::{CommandContext, CommandRegistry, CommandService, Dispatch};
