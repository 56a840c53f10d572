// File: nitrobot-core/src/services/server_commands/mod.rs

pub mod bot_status;
pub mod help;
pub mod power;
pub mod status;

use nitrobot_common::models::{CommandAction, CommandDefinition, MessageEvent, ResponsePayload};
use nitrobot_common::Error;

use crate::services::command_service::CommandContext;
use crate::services::response::error_reply;
use power::PowerAction;

/// Routes a matched, enabled command with satisfied arity to its handler.
/// The action set is closed, so wiring mistakes are impossible past config
/// load.
pub async fn handle_command(
    command: &CommandDefinition,
    event: &MessageEvent,
    ctx: &CommandContext<'_>,
    args: &[String],
) -> Result<ResponsePayload, Error> {
    match command.action {
        CommandAction::ServerStatus => status::handle_server_status(event, ctx, args).await,
        CommandAction::StartServer => {
            power::handle_power_action(PowerAction::Start, event, ctx, args).await
        }
        CommandAction::StopServer => {
            power::handle_power_action(PowerAction::Stop, event, ctx, args).await
        }
        CommandAction::RestartServer => {
            power::handle_power_action(PowerAction::Restart, event, ctx, args).await
        }
        CommandAction::BotStatus => Ok(bot_status::handle_bot_status(event)),
        CommandAction::Help => Ok(help::handle_help(event, ctx)),
    }
}

/// The dominant failure mode: the typed server name matched nothing in the
/// accounts table. Returned before any network call is attempted.
pub(crate) fn no_credentials_reply(title: &str, event: &MessageEvent) -> ResponsePayload {
    error_reply(title, "No gameserver credentials", event.attribution())
}
