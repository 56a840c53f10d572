// File: nitrobot-core/tests/server_command_tests.rs
//
// Handler-level behavior, exercised through the dispatcher: lifecycle
// color mapping, provider envelope classification, and the no-network
// handlers (help, bot status).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use nitrobot_common::models::{
    AccountsConfig, CommandsConfig, MessageEvent, ResponseColor, ResponsePayload,
};
use nitrobot_common::Error;
use nitrobot_core::platforms::nitrado::{GameserverEnvelope, NitradoApi};
use nitrobot_core::services::{CommandService, Dispatch};

#[derive(Default)]
struct RecordingApi {
    calls: Mutex<Vec<String>>,
    reply: Mutex<Option<GameserverEnvelope>>,
    fail: Mutex<bool>,
}

impl RecordingApi {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn with_reply(raw: &str) -> Arc<Self> {
        let api = Self::default();
        *api.reply.lock().unwrap() = Some(serde_json::from_str(raw).unwrap());
        Arc::new(api)
    }

    fn failing() -> Arc<Self> {
        let api = Self::default();
        *api.fail.lock().unwrap() = true;
        Arc::new(api)
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, op: &str) -> Result<GameserverEnvelope, Error> {
        self.calls.lock().unwrap().push(op.to_string());
        if *self.fail.lock().unwrap() {
            return Err(Error::Platform("connection refused".to_string()));
        }
        self.reply
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Platform("no reply queued".to_string()))
    }
}

#[async_trait]
impl NitradoApi for RecordingApi {
    async fn get_gameserver_details(
        &self,
        _auth_token: &str,
        _gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error> {
        self.respond("get_gameserver_details")
    }

    async fn start_gameserver(
        &self,
        _auth_token: &str,
        _gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error> {
        self.respond("start_gameserver")
    }

    async fn stop_gameserver(
        &self,
        _auth_token: &str,
        _gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error> {
        self.respond("stop_gameserver")
    }

    async fn restart_gameserver(
        &self,
        _auth_token: &str,
        _gameserver_id: &str,
    ) -> Result<GameserverEnvelope, Error> {
        self.respond("restart_gameserver")
    }
}

const COMMANDS_JSON: &str = r#"{
    "base_trigger": "!",
    "commands": [
        { "trigger": "status", "arg_num": 1, "arg_names": ["server_name"],
          "examples": ["!status my_server"],
          "description": "Show the current status of a gameserver",
          "enabled": true, "function": "server_status" },
        { "trigger": "start", "arg_num": 1, "arg_names": ["server_name"],
          "examples": ["!start my_server"],
          "description": "Start a stopped gameserver",
          "enabled": true, "function": "start_server" },
        { "trigger": "stop", "arg_num": 1, "arg_names": ["server_name"],
          "examples": ["!stop my_server"],
          "description": "Stop a running gameserver",
          "enabled": false, "function": "stop_server" },
        { "trigger": "botstatus", "arg_num": 0, "arg_names": [],
          "examples": ["!botstatus"],
          "description": "Check whether the bot is available",
          "enabled": true, "function": "bot_status" },
        { "trigger": "help", "arg_num": 0, "arg_names": [],
          "examples": ["!help"],
          "description": "List all commands",
          "enabled": true, "function": "help" }
    ]
}"#;

const ACCOUNTS_JSON: &str = r#"{
    "nitrado_accounts": [
        {
            "auth_token": "token-alpha",
            "gameservers": [
                { "gameserver_id": "100001", "gameserver_name": "MyServer" }
            ]
        }
    ]
}"#;

fn build_service(api: Arc<RecordingApi>) -> CommandService {
    let commands: CommandsConfig = serde_json::from_str(COMMANDS_JSON).unwrap();
    let accounts: AccountsConfig = serde_json::from_str(ACCOUNTS_JSON).unwrap();
    CommandService::new(commands, accounts, api).unwrap()
}

fn user_message(text: &str) -> MessageEvent {
    MessageEvent {
        channel_id: "123456".to_string(),
        author_id: "42".to_string(),
        author_name: "alice".to_string(),
        author_avatar_url: None,
        author_is_bot: false,
        text: text.to_string(),
    }
}

async fn dispatch_reply(service: &CommandService, text: &str) -> ResponsePayload {
    match service.dispatch(&user_message(text)).await.unwrap() {
        Dispatch::Reply(payload) => payload,
        Dispatch::NoMatch => panic!("expected a reply for '{text}'"),
    }
}

fn status_service(state: &str) -> CommandService {
    build_service(RecordingApi::with_reply(&format!(
        r#"{{"status":"success","data":{{"gameserver":{{"status":"{state}"}}}}}}"#
    )))
}

#[tokio::test]
async fn started_renders_success_color() {
    let payload = dispatch_reply(&status_service("started"), "!status myserver").await;
    assert_eq!(payload.color, ResponseColor::Success);
}

#[tokio::test]
async fn restarting_renders_warning_color() {
    let payload = dispatch_reply(&status_service("restarting"), "!status myserver").await;
    assert_eq!(payload.color, ResponseColor::Warning);
}

#[tokio::test]
async fn other_lifecycle_states_render_error_color() {
    for state in ["stopped", "crashed", "suspended"] {
        let payload = dispatch_reply(&status_service(state), "!status myserver").await;
        assert_eq!(payload.color, ResponseColor::Error, "state '{state}'");
        assert!(payload.fields[0]
            .value
            .contains(&format!("Status: **{state}**")));
    }
}

#[tokio::test]
async fn players_line_requires_both_counts() {
    // Only player_current present: the line is omitted entirely, no
    // partial "Players: 3/" text.
    let api = RecordingApi::with_reply(
        r#"{"status":"success","data":{"gameserver":{
            "status":"started","query":{"player_current":3}}}}"#,
    );
    let payload = dispatch_reply(&build_service(api), "!status myserver").await;
    assert!(!payload.fields[0].value.contains("Players"));

    // No query block at all: same.
    let api = RecordingApi::with_reply(
        r#"{"status":"success","data":{"gameserver":{"status":"started"}}}"#,
    );
    let payload = dispatch_reply(&build_service(api), "!status myserver").await;
    assert!(!payload.fields[0].value.contains("Players"));
}

#[tokio::test]
async fn missing_envelope_fields_are_reported_outermost_first() {
    let cases = [
        (r#"{"status":"success"}"#, "Missing data in provider response"),
        (
            r#"{"status":"success","data":{}}"#,
            "Missing gameserver in provider response",
        ),
        (
            r#"{"status":"success","data":{"gameserver":{}}}"#,
            "Missing gameserver status in provider response",
        ),
    ];
    for (raw, expected) in cases {
        let payload =
            dispatch_reply(&build_service(RecordingApi::with_reply(raw)), "!status myserver")
                .await;
        assert_eq!(payload.color, ResponseColor::Error);
        assert_eq!(payload.fields[0].value, expected);
    }
}

#[tokio::test]
async fn status_transport_failure_renders_generic_error() {
    let payload =
        dispatch_reply(&build_service(RecordingApi::failing()), "!status myserver").await;
    assert_eq!(payload.color, ResponseColor::Error);
    assert_eq!(payload.fields[0].value, "Gameserver status request failed");
}

#[tokio::test]
async fn start_success_confirms_and_calls_start_operation() {
    let api = RecordingApi::with_reply(r#"{"status":"success","message":"restarting"}"#);
    let service = build_service(api.clone());

    let payload = dispatch_reply(&service, "!start myserver").await;
    assert_eq!(payload.color, ResponseColor::Success);
    assert_eq!(payload.title, "Start Gameserver");
    assert_eq!(payload.fields[0].name, "MyServer");
    assert!(payload.fields[0].value.contains("Start request sent"));
    assert_eq!(api.calls(), vec!["start_gameserver".to_string()]);
}

#[tokio::test]
async fn power_failure_uses_the_provider_message() {
    let api = RecordingApi::with_reply(
        r#"{"status":"error","message":"Can not start server"}"#,
    );
    let payload = dispatch_reply(&build_service(api), "!start myserver").await;

    assert_eq!(payload.color, ResponseColor::Error);
    assert_eq!(
        payload.fields[0].value,
        "Failed to start gameserver: Can not start server"
    );
}

#[tokio::test]
async fn power_failure_falls_back_to_the_raw_status() {
    let api = RecordingApi::with_reply(r#"{"status":"rate-limited"}"#);
    let payload = dispatch_reply(&build_service(api), "!start myserver").await;

    assert_eq!(
        payload.fields[0].value,
        "Failed to start gameserver: rate-limited"
    );
}

#[tokio::test]
async fn power_transport_failure_renders_generic_error() {
    let payload =
        dispatch_reply(&build_service(RecordingApi::failing()), "!start myserver").await;
    assert_eq!(payload.fields[0].value, "Gameserver start request failed");
}

#[tokio::test]
async fn bot_status_needs_no_credentials_and_no_network() {
    let api = RecordingApi::new();
    let service = build_service(api.clone());

    let payload = dispatch_reply(&service, "!botstatus").await;
    assert_eq!(payload.color, ResponseColor::Success);
    assert_eq!(payload.fields[0].name, "Bot Status");
    assert_eq!(payload.fields[0].value, "Available");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn help_lists_every_command_in_registration_order() {
    let api = RecordingApi::new();
    let service = build_service(api.clone());

    let payload = dispatch_reply(&service, "!help").await;
    assert_eq!(payload.color, ResponseColor::Neutral);

    // One field per registered command, disabled ones included.
    let names: Vec<&str> = payload.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "!status <server_name>",
            "!start <server_name>",
            "!stop <server_name>",
            "!botstatus",
            "!help",
        ]
    );
    assert!(payload.fields[0].value.contains("`!status my_server`"));
    assert!(api.calls().is_empty());
}
