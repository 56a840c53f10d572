use serde::{Deserialize, Serialize};

/// Top-level shape of `commands.json`. `base_trigger` and `commands` are
/// required; a document missing either fails to parse and startup aborts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandsConfig {
    pub base_trigger: String,
    pub commands: Vec<CommandDefinition>,
}

/// One chat command (e.g. `!status`) the bot can handle.
///
/// `arg_num` is a floor, not an exact count: handlers receive every token
/// after the trigger and may interpret extras themselves. `arg_names` and
/// `examples` feed help and error text only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub trigger: String,
    pub arg_num: usize,
    #[serde(default)]
    pub arg_names: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub enabled: bool,
    #[serde(rename = "function")]
    pub action: CommandAction,
}

/// Closed set of handlers a command can be wired to. The config's
/// `function` key deserializes into this; an unknown name is a load error
/// rather than a runtime lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandAction {
    ServerStatus,
    StartServer,
    StopServer,
    RestartServer,
    BotStatus,
    Help,
}
