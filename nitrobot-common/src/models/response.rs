use chrono::{DateTime, Utc};

/// Display-ready reply description: renderer-agnostic, built once per
/// invocation and handed to the transport for serialization into whatever
/// the chat platform renders (a Discord embed here).
#[derive(Debug, Clone)]
pub struct ResponsePayload {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub color: ResponseColor,
    pub fields: Vec<ResponseField>,
    pub attribution: Attribution,
    pub timestamp: DateTime<Utc>,
}

/// One ordered (label, text, inline) triple. Order is significant and
/// preserved through to the rendered embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl ResponseField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// Outcome classification mapped to fixed display colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseColor {
    Success,
    Warning,
    Error,
    Neutral,
}

impl ResponseColor {
    pub const fn hex(self) -> u32 {
        match self {
            ResponseColor::Success => 0x7ed321,
            ResponseColor::Warning => 0xf5a623,
            ResponseColor::Error => 0xd0021b,
            ResponseColor::Neutral => 0x4a90e2,
        }
    }
}

/// Who asked for this response; rendered into the reply footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub name: String,
    pub icon_url: Option<String>,
}
