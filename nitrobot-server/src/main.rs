use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use nitrobot_common::Error;
use nitrobot_core::config::{load_accounts_config, load_commands_config};
use nitrobot_core::platforms::discord::DiscordPlatform;
use nitrobot_core::platforms::nitrado::NitradoClient;
use nitrobot_core::platforms::{PlatformAuth, PlatformIntegration};
use nitrobot_core::services::{CommandService, Dispatch};

#[derive(Parser, Debug, Clone)]
#[command(name = "nitrobot")]
#[command(author, version, about = "Nitrobot - Discord bot for controlling Nitrado gameservers")]
struct Args {
    /// Path to the command table
    #[arg(long, default_value = "config/commands.json")]
    commands_file: String,

    /// Path to the Nitrado accounts document
    #[arg(long, default_value = "config/nitrapi_account_config.json")]
    accounts_file: String,

    /// Path to a .env file holding DISCORD_TOKEN
    #[arg(long, default_value = "config/.env")]
    env_file: String,
}

fn init_tracing() {
    let filter = EnvFilter::from_default_env()
        .add_directive("nitrobot=info".parse().unwrap_or_default());
    let sub = fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(sub)
        .expect("Failed to set global subscriber");
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();
    info!(
        "Nitrobot starting. commands={}, accounts={}",
        args.commands_file, args.accounts_file
    );

    if let Err(e) = run(args).await {
        // Startup configuration problems land here; none of them are
        // recoverable without a config fix, so exit rather than limp along
        // half-started.
        error!("Fatal: {e}");
        std::process::exit(1);
    }
    info!("Main finished. Goodbye!");
}

async fn run(args: Args) -> Result<(), Error> {
    // 1) Environment + chat-session token
    if dotenv::from_path(&args.env_file).is_err() {
        dotenv::dotenv().ok();
    }
    let token = std::env::var("DISCORD_TOKEN")
        .map_err(|_| Error::Config("DISCORD_TOKEN is not set".to_string()))?;

    // 2) Startup configuration; missing keys abort before anything connects
    let commands_config = load_commands_config(&args.commands_file)?;
    let accounts_config = load_accounts_config(&args.accounts_file)?;

    // 3) Engine wiring: hosting client + dispatcher
    let nitrado = Arc::new(NitradoClient::new());
    let service = CommandService::new(commands_config, accounts_config, nitrado)?;

    // 4) Discord transport
    let mut discord = DiscordPlatform::new(token);
    discord.authenticate().await?;
    discord.connect().await?;
    info!("Nitrado server controls bot is ready");

    // 5) Message loop. One event at a time; a failing handler is logged
    //    and swallowed here, at the outermost boundary, so one bad message
    //    never terminates the process.
    loop {
        tokio::select! {
            maybe_event = discord.next_message_event() => {
                let Some(event) = maybe_event else {
                    warn!("Message stream ended; shutting down.");
                    break;
                };
                match service.dispatch(&event).await {
                    Ok(Dispatch::NoMatch) => {}
                    Ok(Dispatch::Reply(payload)) => {
                        if let Err(e) = discord.send_response(&event.channel_id, &payload).await {
                            error!("Failed to deliver reply: {e:?}");
                        }
                    }
                    Err(e) => {
                        error!("Command handling failed for '{}': {e:?}", event.text);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C detected; disconnecting.");
                break;
            }
        }
    }

    discord.disconnect().await?;
    Ok(())
}
