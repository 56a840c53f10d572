// File: nitrobot-core/src/services/command_service.rs

use std::sync::Arc;

use tracing::debug;

use nitrobot_common::models::{
    AccountsConfig, CommandDefinition, CommandsConfig, MessageEvent, ResponsePayload,
};
use nitrobot_common::Error;

use crate::platforms::nitrado::NitradoApi;
use crate::services::response::error_reply;
use crate::services::server_commands;

/// Ordered, append-only command table plus the single trigger prefix.
/// Populated once at startup and read-only afterwards; there is no removal
/// and no hot reload.
pub struct CommandRegistry {
    prefix: String,
    commands: Vec<CommandDefinition>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            commands: Vec::new(),
        }
    }

    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = prefix.to_string();
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Appends a definition. A duplicate trigger would make dispatch depend
    /// on registration order, so it is a configuration error here rather
    /// than a runtime tie-break.
    pub fn register(&mut self, definition: CommandDefinition) -> Result<(), Error> {
        if self
            .commands
            .iter()
            .any(|c| c.trigger == definition.trigger)
        {
            return Err(Error::Config(format!(
                "duplicate command trigger '{}'",
                definition.trigger
            )));
        }
        self.commands.push(definition);
        Ok(())
    }

    /// All definitions in registration order, for help rendering.
    pub fn commands(&self) -> &[CommandDefinition] {
        &self.commands
    }

    /// Exact `prefix + trigger` match against the first message token.
    /// Scans the whole table; triggers are unique so at most one can match.
    fn find_by_token(&self, token: &str) -> Option<&CommandDefinition> {
        self.commands
            .iter()
            .find(|c| token == format!("{}{}", self.prefix, c.trigger))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Dependencies handlers need, borrowed for one dispatch. All of it is
/// read-only shared state; handlers own no state across messages.
pub struct CommandContext<'a> {
    pub accounts: &'a AccountsConfig,
    pub nitrado: &'a dyn NitradoApi,
    pub registry: &'a CommandRegistry,
}

/// Outcome of one dispatch. `NoMatch` is first-class: a message that is
/// not a command is silently ignored, which is different from both a
/// reply and an error.
#[derive(Debug)]
pub enum Dispatch {
    NoMatch,
    Reply(ResponsePayload),
}

/// The routing engine: parses an inbound message, matches it against the
/// registry, enforces enablement and arity, and invokes the matched
/// handler. Stateless between messages.
pub struct CommandService {
    registry: CommandRegistry,
    accounts: AccountsConfig,
    nitrado: Arc<dyn NitradoApi>,
}

impl CommandService {
    pub fn new(
        config: CommandsConfig,
        accounts: AccountsConfig,
        nitrado: Arc<dyn NitradoApi>,
    ) -> Result<Self, Error> {
        let mut registry = CommandRegistry::new();
        registry.set_prefix(&config.base_trigger);
        for definition in config.commands {
            registry.register(definition)?;
        }
        debug!(
            "CommandService initialized with {} command(s), prefix '{}'",
            registry.commands().len(),
            registry.prefix()
        );
        Ok(Self {
            registry,
            accounts,
            nitrado,
        })
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Processes one chat message.
    ///
    /// Handler failures are not caught here: the dispatcher is a pure
    /// router and propagates them as `Err` for the outermost boundary to
    /// log and swallow.
    pub async fn dispatch(&self, event: &MessageEvent) -> Result<Dispatch, Error> {
        // Bot-authored messages are never commands; this also breaks
        // bot-to-bot reply loops.
        if event.author_is_bot {
            debug!("Ignoring bot message from {}", event.author_name);
            return Ok(Dispatch::NoMatch);
        }

        let text = event.text.trim();
        if !text.starts_with(self.registry.prefix()) {
            return Ok(Dispatch::NoMatch);
        }

        let mut tokens = text.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(Dispatch::NoMatch);
        };
        let Some(command) = self.registry.find_by_token(first) else {
            debug!("No command found matching '{}'", first);
            return Ok(Dispatch::NoMatch);
        };

        // The disabled check precedes arity: a disabled command answers
        // "disabled" even when invoked with too few arguments.
        if !command.enabled {
            return Ok(Dispatch::Reply(error_reply(
                "Command Disabled",
                format!(
                    "command \"{}{}\" is disabled",
                    self.registry.prefix(),
                    command.trigger
                ),
                event.attribution(),
            )));
        }

        let ctx = CommandContext {
            accounts: &self.accounts,
            nitrado: self.nitrado.as_ref(),
            registry: &self.registry,
        };

        // Zero-arity commands run unconditionally and take no arguments.
        // Otherwise arity is a floor: the handler receives every remaining
        // token and may interpret extras itself.
        let args: Vec<String> = tokens.map(str::to_string).collect();
        if command.arg_num == 0 {
            let payload = server_commands::handle_command(command, event, &ctx, &[]).await?;
            return Ok(Dispatch::Reply(payload));
        }
        if args.len() < command.arg_num {
            return Ok(Dispatch::Reply(error_reply(
                "Missing Arguments",
                format!(
                    "command \"{}{}\" requires {} argument(s) \"{}\"",
                    self.registry.prefix(),
                    command.trigger,
                    command.arg_num,
                    command.arg_names.join(", ")
                ),
                event.attribution(),
            )));
        }

        let payload = server_commands::handle_command(command, event, &ctx, &args).await?;
        Ok(Dispatch::Reply(payload))
    }
}
