// File: nitrobot-core/src/services/server_commands/bot_status.rs

use nitrobot_common::models::{MessageEvent, ResponseColor, ResponseField, ResponsePayload};

use crate::services::response::{render, ResponseParams};

/// Liveness check for the bot itself. No credentials, no network call; if
/// this answers at all, the answer is "Available".
pub fn handle_bot_status(event: &MessageEvent) -> ResponsePayload {
    render(ResponseParams {
        title: "Bot Status".to_string(),
        description: None,
        color: ResponseColor::Success,
        fields: vec![ResponseField::new("Bot Status", "Available")],
        attribution: event.attribution(),
    })
}
