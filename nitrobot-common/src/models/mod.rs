// File: nitrobot-common/src/models/mod.rs
pub mod account;
pub mod command;
pub mod message;
pub mod response;

pub use account::{AccountsConfig, Gameserver, NitradoAccount, ServerCredentials};
pub use command::{CommandAction, CommandDefinition, CommandsConfig};
pub use message::MessageEvent;
pub use response::{Attribution, ResponseColor, ResponseField, ResponsePayload};
