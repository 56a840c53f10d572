// File: nitrobot-core/src/services/server_commands/power.rs

use tracing::{info, warn};

use nitrobot_common::models::{MessageEvent, ResponseColor, ResponseField, ResponsePayload};
use nitrobot_common::Error;

use crate::services::command_service::CommandContext;
use crate::services::credentials::resolve_credentials;
use crate::services::response::{error_reply, render, ResponseParams};
use crate::services::server_commands::no_credentials_reply;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Start,
    Stop,
    Restart,
}

impl PowerAction {
    pub fn title(self) -> &'static str {
        match self {
            PowerAction::Start => "Start Gameserver",
            PowerAction::Stop => "Stop Gameserver",
            PowerAction::Restart => "Restart Gameserver",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PowerAction::Start => "start",
            PowerAction::Stop => "stop",
            PowerAction::Restart => "restart",
        }
    }

    fn confirmation(self) -> &'static str {
        match self {
            PowerAction::Start => "Start request sent. The gameserver is booting up.",
            PowerAction::Stop => "Stop request sent. The gameserver is shutting down.",
            PowerAction::Restart => "Restart request sent. The gameserver is restarting.",
        }
    }
}

/// Shared skeleton for the three power commands: resolve credentials,
/// issue the provider call, classify the envelope. Power endpoints return
/// no nested gameserver payload, so classification is on the envelope
/// status alone.
pub async fn handle_power_action(
    action: PowerAction,
    event: &MessageEvent,
    ctx: &CommandContext<'_>,
    args: &[String],
) -> Result<ResponsePayload, Error> {
    let title = action.title();
    let server_name = args.first().map(String::as_str).unwrap_or_default();
    let Some(creds) = resolve_credentials(server_name, ctx.accounts) else {
        return Ok(no_credentials_reply(title, event));
    };

    let result = match action {
        PowerAction::Start => {
            ctx.nitrado
                .start_gameserver(&creds.auth_token, &creds.gameserver_id)
                .await
        }
        PowerAction::Stop => {
            ctx.nitrado
                .stop_gameserver(&creds.auth_token, &creds.gameserver_id)
                .await
        }
        PowerAction::Restart => {
            ctx.nitrado
                .restart_gameserver(&creds.auth_token, &creds.gameserver_id)
                .await
        }
    };

    let envelope = match result {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(
                "Gameserver {} request failed for '{}': {:?}",
                action.label(),
                creds.gameserver_name,
                e
            );
            return Ok(error_reply(
                title,
                format!("Gameserver {} request failed", action.label()),
                event.attribution(),
            ));
        }
    };

    if envelope.status.as_deref() != Some("success") {
        let message = envelope
            .message
            .clone()
            .or_else(|| envelope.status.clone())
            .unwrap_or_else(|| "unknown".to_string());
        return Ok(error_reply(
            title,
            format!("Failed to {} gameserver: {}", action.label(), message),
            event.attribution(),
        ));
    }

    info!(
        "Gameserver {} accepted for '{}'",
        action.label(),
        creds.gameserver_name
    );

    Ok(render(ResponseParams {
        title: title.to_string(),
        description: None,
        color: ResponseColor::Success,
        fields: vec![ResponseField::new(
            creds.gameserver_name.clone(),
            action.confirmation(),
        )],
        attribution: event.attribution(),
    }))
}
