// File: nitrobot-core/tests/response_tests.rs

use nitrobot_common::models::{Attribution, ResponseColor, ResponseField};
use nitrobot_core::services::response::{error_reply, render, ResponseParams, PROJECT_URL};

fn attribution() -> Attribution {
    Attribution {
        name: "alice".to_string(),
        icon_url: None,
    }
}

#[test]
fn field_order_is_preserved() {
    let payload = render(ResponseParams {
        title: "Title".to_string(),
        description: None,
        color: ResponseColor::Neutral,
        fields: vec![
            ResponseField::new("first", "1"),
            ResponseField::new("second", "2"),
            ResponseField::new("third", "3"),
        ],
        attribution: attribution(),
    });

    let names: Vec<&str> = payload.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn rendered_payloads_link_the_project() {
    let payload = render(ResponseParams {
        title: "Title".to_string(),
        description: Some("desc".to_string()),
        color: ResponseColor::Success,
        fields: vec![],
        attribution: attribution(),
    });
    assert_eq!(payload.url.as_deref(), Some(PROJECT_URL));
    assert_eq!(payload.description.as_deref(), Some("desc"));
}

#[test]
fn error_reply_is_a_single_error_field() {
    let payload = error_reply("Stop Gameserver", "boom", attribution());
    assert_eq!(payload.color, ResponseColor::Error);
    assert_eq!(payload.title, "Stop Gameserver");
    assert_eq!(payload.fields.len(), 1);
    assert_eq!(payload.fields[0].name, "Error");
    assert_eq!(payload.fields[0].value, "boom");
    assert!(!payload.fields[0].inline);
}

#[test]
fn color_classes_map_to_fixed_hex_values() {
    assert_eq!(ResponseColor::Success.hex(), 0x7ed321);
    assert_eq!(ResponseColor::Warning.hex(), 0xf5a623);
    assert_eq!(ResponseColor::Error.hex(), 0xd0021b);
    assert_eq!(ResponseColor::Neutral.hex(), 0x4a90e2);
}
