// File: nitrobot-core/src/services/server_commands/status.rs

use tracing::warn;

use nitrobot_common::models::{MessageEvent, ResponseColor, ResponseField, ResponsePayload};
use nitrobot_common::Error;

use crate::services::command_service::CommandContext;
use crate::services::credentials::resolve_credentials;
use crate::services::response::{error_reply, render, ResponseParams};
use crate::services::server_commands::no_credentials_reply;

const TITLE: &str = "Gameserver Status";

/// Queries the hosting provider for a gameserver's current state and
/// renders it with a lifecycle color: `started` reads as Success,
/// `restarting` as Warning, anything else as Error.
pub async fn handle_server_status(
    event: &MessageEvent,
    ctx: &CommandContext<'_>,
    args: &[String],
) -> Result<ResponsePayload, Error> {
    let server_name = args.first().map(String::as_str).unwrap_or_default();
    let Some(creds) = resolve_credentials(server_name, ctx.accounts) else {
        return Ok(no_credentials_reply(TITLE, event));
    };

    let envelope = match ctx
        .nitrado
        .get_gameserver_details(&creds.auth_token, &creds.gameserver_id)
        .await
    {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(
                "Gameserver details request failed for '{}': {:?}",
                creds.gameserver_name, e
            );
            return Ok(error_reply(
                TITLE,
                "Gameserver status request failed",
                event.attribution(),
            ));
        }
    };

    // Shape checks run outermost-first; the first absent field decides the
    // message and nothing past it is inspected.
    let Some(data) = envelope.data.as_ref() else {
        return Ok(error_reply(
            TITLE,
            "Missing data in provider response",
            event.attribution(),
        ));
    };
    let Some(gameserver) = data.gameserver.as_ref() else {
        return Ok(error_reply(
            TITLE,
            "Missing gameserver in provider response",
            event.attribution(),
        ));
    };
    let Some(state) = gameserver.status.as_deref() else {
        return Ok(error_reply(
            TITLE,
            "Missing gameserver status in provider response",
            event.attribution(),
        ));
    };

    if envelope.status.as_deref() != Some("success") {
        let message = envelope
            .message
            .clone()
            .or_else(|| envelope.status.clone())
            .unwrap_or_else(|| "unknown".to_string());
        return Ok(error_reply(
            TITLE,
            format!("Gameserver status request failed: {}", message),
            event.attribution(),
        ));
    }

    let color = match state {
        "started" => ResponseColor::Success,
        "restarting" => ResponseColor::Warning,
        _ => ResponseColor::Error,
    };

    let mut lines = vec![format!("Status: **{}**", state)];
    // The players line is all-or-nothing: no partial "3/" text when the
    // query block lacks one of the counts.
    if let Some(query) = &gameserver.query {
        if let (Some(current), Some(max)) = (query.player_current, query.player_max) {
            lines.push(format!("Players: {}/{}", current, max));
        }
    }

    Ok(render(ResponseParams {
        title: TITLE.to_string(),
        description: None,
        color,
        fields: vec![ResponseField::new(
            creds.gameserver_name.clone(),
            lines.join("\n"),
        )],
        attribution: event.attribution(),
    }))
}
