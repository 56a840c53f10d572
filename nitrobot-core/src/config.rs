// File: nitrobot-core/src/config.rs
//
// Loads the two startup documents: the command table and the Nitrado
// accounts list. Both are parsed once at startup and treated as immutable
// for the process lifetime; any defect found here is a startup error the
// server turns into a fatal exit, never a partial boot.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use nitrobot_common::models::{AccountsConfig, CommandsConfig};
use nitrobot_common::Error;

pub fn parse_commands_config(raw: &str) -> Result<CommandsConfig, Error> {
    let config: CommandsConfig = serde_json::from_str(raw)
        .map_err(|e| Error::Config(format!("commands config: {e}")))?;

    // Duplicate triggers would make dispatch order-dependent; reject them
    // here instead of relying on registration order at runtime.
    let mut seen: HashSet<&str> = HashSet::new();
    for command in &config.commands {
        if !seen.insert(command.trigger.as_str()) {
            return Err(Error::Config(format!(
                "commands config: duplicate trigger '{}'",
                command.trigger
            )));
        }
    }

    Ok(config)
}

pub fn parse_accounts_config(raw: &str) -> Result<AccountsConfig, Error> {
    serde_json::from_str(raw).map_err(|e| Error::Config(format!("accounts config: {e}")))
}

pub fn load_commands_config(path: impl AsRef<Path>) -> Result<CommandsConfig, Error> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("reading {}: {e}", path.display())))?;
    let config = parse_commands_config(&raw)?;
    info!(
        "Loaded {} command(s) with base trigger '{}' from {}",
        config.commands.len(),
        config.base_trigger,
        path.display()
    );
    Ok(config)
}

pub fn load_accounts_config(path: impl AsRef<Path>) -> Result<AccountsConfig, Error> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("reading {}: {e}", path.display())))?;
    let config = parse_accounts_config(&raw)?;
    let server_count: usize = config
        .nitrado_accounts
        .iter()
        .map(|a| a.gameservers.len())
        .sum();
    info!(
        "Loaded {} Nitrado account(s) covering {} gameserver(s) from {}",
        config.nitrado_accounts.len(),
        server_count,
        path.display()
    );
    Ok(config)
}
