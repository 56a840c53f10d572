// File: nitrobot-core/src/services/server_commands/help.rs

use nitrobot_common::models::{MessageEvent, ResponseColor, ResponseField, ResponsePayload};

use crate::services::command_service::CommandContext;
use crate::services::response::{render, ResponseParams};

/// Renders one field per registered command in registration order,
/// disabled commands included - users should see what exists, not only
/// what is currently switched on.
pub fn handle_help(event: &MessageEvent, ctx: &CommandContext<'_>) -> ResponsePayload {
    let prefix = ctx.registry.prefix();

    let mut fields = Vec::new();
    for command in ctx.registry.commands() {
        let mut usage = format!("{}{}", prefix, command.trigger);
        for arg_name in &command.arg_names {
            usage.push_str(&format!(" <{}>", arg_name));
        }

        let mut lines = Vec::new();
        if !command.description.is_empty() {
            lines.push(command.description.clone());
        }
        for example in &command.examples {
            lines.push(format!("`{}`", example));
        }
        if lines.is_empty() {
            lines.push("No description".to_string());
        }

        fields.push(ResponseField::new(usage, lines.join("\n")));
    }

    render(ResponseParams {
        title: "Available Commands".to_string(),
        description: None,
        color: ResponseColor::Neutral,
        fields,
        attribution: event.attribution(),
    })
}
