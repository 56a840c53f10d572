// File: nitrobot-core/src/platforms/nitrado/client.rs

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;

use nitrobot_common::Error;

use crate::platforms::nitrado::requests::gameserver;
use crate::platforms::nitrado::{GameserverEnvelope, NitradoApi};

pub const NITRADO_API_BASE: &str = "https://api.nitrado.net";

/// A small wrapper client for calling the Nitrado gameserver endpoints.
///
/// The individual endpoint calls live in `requests::gameserver`; this
/// struct is the reusable entry point holding the HTTP client and base
/// URL (overridable for tests against a local stub).
pub struct NitradoClient {
    http: Arc<ReqwestClient>,
    base_url: String,
}

impl NitradoClient {
    pub fn new() -> Self {
        Self::with_base_url(NITRADO_API_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: Arc::new(ReqwestClient::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns an `Arc<ReqwestClient>` reference for the request helpers.
    pub fn http_client(&self) -> Arc<ReqwestClient> {
        self.http.clone()
    }
}

impl Default for NitradoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NitradoApi for NitradoClient {
    async fn get_gameserver_details(
        &self,
        auth_token: &str,
        gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error> {
        gameserver::fetch_gameserver_details(self, auth_token, gameserver_id).await
    }

    async fn start_gameserver(
        &self,
        auth_token: &str,
        gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error> {
        // Nitrado has no dedicated start endpoint; a restart boots a
        // stopped server.
        gameserver::post_restart_gameserver(self, auth_token, gameserver_id).await
    }

    async fn stop_gameserver(
        &self,
        auth_token: &str,
        gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error> {
        gameserver::post_stop_gameserver(self, auth_token, gameserver_id).await
    }

    async fn restart_gameserver(
        &self,
        auth_token: &str,
        gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error> {
        gameserver::post_restart_gameserver(self, auth_token, gameserver_id).await
    }
}
