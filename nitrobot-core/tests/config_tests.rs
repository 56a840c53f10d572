// File: nitrobot-core/tests/config_tests.rs

use std::io::Write;

use nitrobot_common::models::CommandAction;
use nitrobot_common::Error;
use nitrobot_core::config::{
    load_commands_config, parse_accounts_config, parse_commands_config,
};

const VALID_COMMANDS: &str = r#"{
    "base_trigger": "!",
    "commands": [
        { "trigger": "status", "arg_num": 1, "arg_names": ["server_name"],
          "examples": ["!status my_server"], "description": "Status",
          "enabled": true, "function": "server_status" },
        { "trigger": "help", "arg_num": 0, "arg_names": [],
          "examples": [], "description": "Help",
          "enabled": true, "function": "help" }
    ]
}"#;

#[test]
fn valid_commands_document_parses() {
    let config = parse_commands_config(VALID_COMMANDS).unwrap();
    assert_eq!(config.base_trigger, "!");
    assert_eq!(config.commands.len(), 2);
    assert_eq!(config.commands[0].action, CommandAction::ServerStatus);
    assert_eq!(config.commands[1].action, CommandAction::Help);
}

#[test]
fn missing_base_trigger_is_a_config_error() {
    let raw = r#"{ "commands": [] }"#;
    match parse_commands_config(raw) {
        Err(Error::Config(msg)) => assert!(msg.contains("base_trigger")),
        other => panic!("expected Config error, got {:?}", other.err()),
    }
}

#[test]
fn missing_commands_key_is_a_config_error() {
    let raw = r#"{ "base_trigger": "!" }"#;
    match parse_commands_config(raw) {
        Err(Error::Config(msg)) => assert!(msg.contains("commands")),
        other => panic!("expected Config error, got {:?}", other.err()),
    }
}

#[test]
fn duplicate_triggers_are_a_config_error() {
    let raw = r#"{
        "base_trigger": "!",
        "commands": [
            { "trigger": "status", "arg_num": 0, "arg_names": [],
              "examples": [], "description": "", "enabled": true,
              "function": "server_status" },
            { "trigger": "status", "arg_num": 0, "arg_names": [],
              "examples": [], "description": "", "enabled": true,
              "function": "bot_status" }
        ]
    }"#;
    match parse_commands_config(raw) {
        Err(Error::Config(msg)) => assert!(msg.contains("duplicate trigger 'status'")),
        other => panic!("expected Config error, got {:?}", other.err()),
    }
}

#[test]
fn unknown_handler_name_is_a_config_error() {
    let raw = r#"{
        "base_trigger": "!",
        "commands": [
            { "trigger": "status", "arg_num": 0, "arg_names": [],
              "examples": [], "description": "", "enabled": true,
              "function": "launch_missiles" }
        ]
    }"#;
    assert!(matches!(parse_commands_config(raw), Err(Error::Config(_))));
}

#[test]
fn missing_nitrado_accounts_key_is_a_config_error() {
    match parse_accounts_config(r#"{ "accounts": [] }"#) {
        Err(Error::Config(msg)) => assert!(msg.contains("nitrado_accounts")),
        other => panic!("expected Config error, got {:?}", other.err()),
    }
}

#[test]
fn accounts_document_parses() {
    let config = parse_accounts_config(
        r#"{
            "nitrado_accounts": [
                { "auth_token": "token-alpha",
                  "gameservers": [
                      { "gameserver_id": "100001", "gameserver_name": "My Server" }
                  ] }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(config.nitrado_accounts.len(), 1);
    assert_eq!(config.nitrado_accounts[0].gameservers[0].gameserver_id, "100001");
}

#[test]
fn commands_load_from_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VALID_COMMANDS.as_bytes()).unwrap();

    let config = load_commands_config(file.path()).unwrap();
    assert_eq!(config.commands.len(), 2);
}

#[test]
fn a_missing_file_is_a_config_error() {
    assert!(matches!(
        load_commands_config("/nonexistent/commands.json"),
        Err(Error::Config(_))
    ));
}
