// ========================================================
// File: nitrobot-core/src/platforms/nitrado/requests/gameserver.rs
// ========================================================
use serde::Deserialize;
use tracing::debug;

use nitrobot_common::Error;

use crate::platforms::nitrado::client::NitradoClient;

/// Envelope Nitrado wraps around every gameserver endpoint response.
///
/// Every nested level is optional: handlers classify a reply by checking
/// field presence in a fixed order (envelope `data`, then `gameserver`,
/// then its `status` leaf), so a partially-shaped body must deserialize
/// rather than fail parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct GameserverEnvelope {
    pub status: Option<String>,
    pub message: Option<String>,
    pub data: Option<GameserverData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameserverData {
    pub gameserver: Option<GameserverDetails>,
}

/// The subset of gameserver detail fields the bot renders.
#[derive(Debug, Clone, Deserialize)]
pub struct GameserverDetails {
    pub status: Option<String>,
    pub query: Option<GameserverQuery>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameserverQuery {
    pub player_current: Option<i64>,
    pub player_max: Option<i64>,
}

/// Fetches the current state of a gameserver ("Gameserver Details").
pub async fn fetch_gameserver_details(
    client: &NitradoClient,
    auth_token: &str,
    gameserver_id: &str,
) -> Result<GameserverEnvelope, Error> {
    let url = format!(
        "{}/services/{}/gameservers",
        client.base_url(),
        gameserver_id
    );
    debug!("Fetching gameserver details for service {}", gameserver_id);

    let resp = client
        .http_client()
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .send()
        .await
        .map_err(|e| Error::Platform(format!("gameserver details network error: {}", e)))?;

    read_envelope(resp, "gameserver details").await
}

/// Issues a restart ("Restart Gameserver"). Also the boot path for a
/// stopped server.
pub async fn post_restart_gameserver(
    client: &NitradoClient,
    auth_token: &str,
    gameserver_id: &str,
) -> Result<GameserverEnvelope, Error> {
    post_power_action(client, auth_token, gameserver_id, "restart").await
}

/// Issues a stop ("Stop Gameserver").
pub async fn post_stop_gameserver(
    client: &NitradoClient,
    auth_token: &str,
    gameserver_id: &str,
) -> Result<GameserverEnvelope, Error> {
    post_power_action(client, auth_token, gameserver_id, "stop").await
}

async fn post_power_action(
    client: &NitradoClient,
    auth_token: &str,
    gameserver_id: &str,
    action: &str,
) -> Result<GameserverEnvelope, Error> {
    let url = format!(
        "{}/services/{}/gameservers/{}",
        client.base_url(),
        gameserver_id,
        action
    );
    debug!("Posting {} for service {}", action, gameserver_id);

    let resp = client
        .http_client()
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .send()
        .await
        .map_err(|e| Error::Platform(format!("gameserver {} network error: {}", action, e)))?;

    read_envelope(resp, action).await
}

async fn read_envelope(
    resp: reqwest::Response,
    what: &str,
) -> Result<GameserverEnvelope, Error> {
    let status = resp.status();
    let body = resp.text().await?;

    // Nitrado delivers failures as JSON envelopes too (HTTP 4xx with a
    // `message`); only an unparseable body counts as a transport failure.
    match serde_json::from_str::<GameserverEnvelope>(&body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !status.is_success() => Err(Error::Platform(format!(
            "{}: HTTP {} => {}",
            what, status, body
        ))),
        Err(e) => Err(Error::Platform(format!("{} parse error: {}", what, e))),
    }
}
