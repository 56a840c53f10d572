use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, trace, warn};

use twilight_gateway::{
    self as gateway, CloseFrame, Config, Event, EventTypeFlags, Intents, MessageSender, Shard,
    StreamExt,
};
use twilight_http::client::ClientBuilder;
use twilight_http::Client as HttpClient;
use twilight_model::channel::message::Embed;
use twilight_model::gateway::payload::incoming::{MessageCreate, Ready as ReadyPayload};
use twilight_model::id::marker::ChannelMarker;
use twilight_model::id::Id;
use twilight_model::util::Timestamp;
use twilight_util::builder::embed::{
    EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder, ImageSource,
};

use nitrobot_common::models::{MessageEvent, ResponsePayload};
use nitrobot_common::Error;

use crate::platforms::{ConnectionStatus, PlatformAuth, PlatformIntegration};

/// The shard runner:
///   - calls `shard.next_event(...)`
///   - forwards inbound chat messages to `tx` as `MessageEvent`s.
///
/// Bot-authored messages are forwarded too, flagged; whether to ignore
/// them is the dispatcher's policy, not the transport's.
async fn shard_runner(mut shard: Shard, tx: UnboundedSender<MessageEvent>) {
    let shard_id = shard.id().number();
    info!("(ShardRunner) Shard {shard_id} started. Listening for events.");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        match item {
            Ok(event) => match &event {
                Event::Ready(ready) => {
                    let data: &ReadyPayload = ready.as_ref();
                    info!(
                        "Shard {shard_id} => READY as {}#{} (ID={})",
                        data.user.name, data.user.discriminator, data.user.id
                    );
                }
                Event::MessageCreate(msg_create) => {
                    let msg: &MessageCreate = msg_create;
                    let avatar_url = msg.author.avatar.map(|hash| {
                        format!(
                            "https://cdn.discordapp.com/avatars/{}/{}.png",
                            msg.author.id, hash
                        )
                    });

                    let _ = tx.send(MessageEvent {
                        channel_id: msg.channel_id.to_string(),
                        author_id: msg.author.id.to_string(),
                        author_name: msg.author.name.clone(),
                        author_avatar_url: avatar_url,
                        author_is_bot: msg.author.bot,
                        text: msg.content.clone(),
                    });
                }
                _ => {
                    trace!("Shard {shard_id} => unhandled event: {event:?}");
                }
            },
            Err(err) => {
                error!("Shard {shard_id} => error receiving event: {err:?}");
            }
        }
    }

    warn!("(ShardRunner) Shard {shard_id} event loop ended.");
}

/// Discord transport: owns the gateway shards and the HTTP client used for
/// reply delivery. Inbound messages queue on an unbounded channel that
/// `next_message_event` drains one at a time.
pub struct DiscordPlatform {
    pub token: String,
    pub connection_status: ConnectionStatus,

    /// The receiver lives in an Option so `connect` can install it and
    /// `disconnect` can tear it down.
    pub rx: Mutex<Option<UnboundedReceiver<MessageEvent>>>,

    pub shard_tasks: Vec<JoinHandle<()>>,
    pub shard_senders: Vec<MessageSender>,

    pub http: Option<Arc<HttpClient>>,
}

impl DiscordPlatform {
    pub fn new(token: String) -> Self {
        Self {
            token,
            connection_status: ConnectionStatus::Disconnected,
            rx: Mutex::new(None),
            shard_tasks: Vec::new(),
            shard_senders: Vec::new(),
            http: None,
        }
    }

    /// Awaits the next inbound message, or `None` once disconnected.
    pub async fn next_message_event(&self) -> Option<MessageEvent> {
        let mut guard = self.rx.lock().await;
        match guard.as_mut() {
            Some(r) => r.recv().await,
            None => None,
        }
    }

    /// Serializes a response payload into a Discord embed and posts it to
    /// the originating channel.
    pub async fn send_response(
        &self,
        channel: &str,
        payload: &ResponsePayload,
    ) -> Result<(), Error> {
        let channel_id_u64: u64 = channel
            .parse()
            .map_err(|_| Error::Platform(format!("Invalid channel ID: {channel}")))?;
        let channel_id = Id::<ChannelMarker>::new(channel_id_u64);

        let embed = build_embed(payload);

        if let Some(http) = &self.http {
            http.create_message(channel_id)
                .embeds(&[embed])
                .await
                .map_err(|e| Error::Platform(format!("Error sending Discord embed: {e:?}")))?;
        }

        Ok(())
    }
}

fn build_embed(payload: &ResponsePayload) -> Embed {
    let mut builder = EmbedBuilder::new()
        .title(payload.title.as_str())
        .color(payload.color.hex());

    if let Some(description) = &payload.description {
        builder = builder.description(description.as_str());
    }
    if let Some(url) = &payload.url {
        builder = builder.url(url.as_str());
    }

    for field in &payload.fields {
        let mut field_builder = EmbedFieldBuilder::new(field.name.as_str(), field.value.as_str());
        if field.inline {
            field_builder = field_builder.inline();
        }
        builder = builder.field(field_builder);
    }

    let mut footer = EmbedFooterBuilder::new(format!("Run by: {}", payload.attribution.name));
    if let Some(icon_url) = &payload.attribution.icon_url {
        if let Ok(source) = ImageSource::url(icon_url.as_str()) {
            footer = footer.icon_url(source);
        }
    }
    builder = builder.footer(footer);

    if let Ok(ts) = Timestamp::from_secs(payload.timestamp.timestamp()) {
        builder = builder.timestamp(ts);
    }

    builder.build()
}

#[async_trait]
impl PlatformAuth for DiscordPlatform {
    async fn authenticate(&mut self) -> Result<(), Error> {
        if self.token.is_empty() {
            return Err(Error::Auth("Discord token is empty".into()));
        }
        Ok(())
    }
    async fn refresh_auth(&mut self) -> Result<(), Error> {
        Ok(())
    }
    async fn revoke_auth(&mut self) -> Result<(), Error> {
        Ok(())
    }
    async fn is_authenticated(&self) -> Result<bool, Error> {
        Ok(!self.token.is_empty())
    }
}

/// Connect, create the unbounded channel, store it in `rx`, and spawn the
/// shard runners.
#[async_trait]
impl PlatformIntegration for DiscordPlatform {
    async fn connect(&mut self) -> Result<(), Error> {
        if matches!(self.connection_status, ConnectionStatus::Connected) {
            info!("(DiscordPlatform) Already connected => skipping");
            return Ok(());
        }

        let (tx, rx) = unbounded_channel::<MessageEvent>();
        {
            let mut guard = self.rx.lock().await;
            *guard = Some(rx);
        }

        let http_client = Arc::new(
            ClientBuilder::new()
                .token(self.token.clone())
                .timeout(Duration::from_secs(30))
                .build(),
        );
        self.http = Some(http_client.clone());

        let config = Config::new(
            self.token.clone(),
            Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT,
        );

        let shards = gateway::create_recommended(&http_client, config, |_, b| b.build())
            .await
            .map_err(|e| Error::Platform(format!("create_recommended error: {e}")))?;

        for shard in shards {
            self.shard_senders.push(shard.sender());

            let tx_for_shard = tx.clone();
            let handle = tokio::spawn(async move {
                shard_runner(shard, tx_for_shard).await;
            });
            self.shard_tasks.push(handle);
        }

        self.connection_status = ConnectionStatus::Connected;
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), Error> {
        self.connection_status = ConnectionStatus::Disconnected;

        // Gracefully close shards
        for sender in &self.shard_senders {
            let _ = sender.close(CloseFrame::NORMAL);
        }
        for task in &mut self.shard_tasks {
            let _ = task.await;
        }

        self.shard_senders.clear();
        self.shard_tasks.clear();

        {
            let mut guard = self.rx.lock().await;
            *guard = None;
        }

        Ok(())
    }

    async fn send_message(&self, channel: &str, message: &str) -> Result<(), Error> {
        let channel_id_u64: u64 = channel
            .parse()
            .map_err(|_| Error::Platform(format!("Invalid channel ID: {channel}")))?;
        let channel_id = Id::<ChannelMarker>::new(channel_id_u64);

        if let Some(http) = &self.http {
            http.create_message(channel_id)
                .content(message)
                .await
                .map_err(|e| Error::Platform(format!("Error sending Discord message: {e:?}")))?;
        }

        Ok(())
    }

    async fn get_connection_status(&self) -> Result<ConnectionStatus, Error> {
        Ok(self.connection_status.clone())
    }
}
