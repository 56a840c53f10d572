// File: nitrobot-core/src/platforms/nitrado/mod.rs

pub mod client;
pub mod requests;

pub use client::NitradoClient;
pub use requests::gameserver::{
    GameserverData, GameserverDetails, GameserverEnvelope, GameserverQuery,
};

use async_trait::async_trait;
use nitrobot_common::Error;

/// The hosting-provider capability: one operation per supported action,
/// each taking the resolved credentials. Command handlers depend on this
/// trait only, so tests swap in mocks and a different provider client
/// could be slotted in without touching the engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NitradoApi: Send + Sync {
    async fn get_gameserver_details(
        &self,
        auth_token: &str,
        gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error>;

    async fn start_gameserver(
        &self,
        auth_token: &str,
        gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error>;

    async fn stop_gameserver(
        &self,
        auth_token: &str,
        gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error>;

    async fn restart_gameserver(
        &self,
        auth_token: &str,
        gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error>;
}
