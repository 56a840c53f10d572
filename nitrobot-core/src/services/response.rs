// File: nitrobot-core/src/services/response.rs

use chrono::Utc;

use nitrobot_common::models::{Attribution, ResponseColor, ResponseField, ResponsePayload};

/// Linked from every reply so users can find the bot's documentation.
pub const PROJECT_URL: &str = "https://github.com/nitrobot/nitrobot";

/// Full set of options the renderer recognizes. A response is built from
/// one of these in a single step; there is no partially-initialized
/// payload to decorate afterwards.
#[derive(Debug, Clone)]
pub struct ResponseParams {
    pub title: String,
    pub description: Option<String>,
    pub color: ResponseColor,
    pub fields: Vec<ResponseField>,
    pub attribution: Attribution,
}

/// Builds the finished payload. Field order is preserved as given. The
/// renderer knows nothing about commands - handlers decide titles, colors
/// and field content.
pub fn render(params: ResponseParams) -> ResponsePayload {
    ResponsePayload {
        title: params.title,
        description: params.description,
        url: Some(PROJECT_URL.to_string()),
        color: params.color,
        fields: params.fields,
        attribution: params.attribution,
        timestamp: Utc::now(),
    }
}

/// Error-colored single-field reply, the shape every user-visible failure
/// renders as.
pub fn error_reply(
    title: impl Into<String>,
    message: impl Into<String>,
    attribution: Attribution,
) -> ResponsePayload {
    render(ResponseParams {
        title: title.into(),
        description: None,
        color: ResponseColor::Error,
        fields: vec![ResponseField::new("Error", message)],
        attribution,
    })
}
