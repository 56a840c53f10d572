// File: src/platforms/mod.rs

use async_trait::async_trait;
use nitrobot_common::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    Reconnecting,
    Error(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlatformAuth {
    async fn authenticate(&mut self) -> Result<(), Error>;
    async fn refresh_auth(&mut self) -> Result<(), Error>;
    async fn revoke_auth(&mut self) -> Result<(), Error>;
    async fn is_authenticated(&self) -> Result<bool, Error>;
}

#[async_trait]
pub trait PlatformIntegration: PlatformAuth {
    async fn connect(&mut self) -> Result<(), Error>;
    async fn disconnect(&mut self) -> Result<(), Error>;
    async fn send_message(&self, channel: &str, message: &str) -> Result<(), Error>;
    async fn get_connection_status(&self) -> Result<ConnectionStatus, Error>;
}

// Re-export submodules
pub mod discord;
pub mod nitrado;
