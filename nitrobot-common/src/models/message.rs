use crate::models::response::Attribution;

/// An inbound chat message, already stripped of transport detail. The
/// channel handle is opaque and is passed back to the transport for reply
/// delivery.
#[derive(Debug, Clone)]
pub struct MessageEvent {
    pub channel_id: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar_url: Option<String>,
    pub author_is_bot: bool,
    pub text: String,
}

impl MessageEvent {
    /// Attribution footer data for responses to this message.
    pub fn attribution(&self) -> Attribution {
        Attribution {
            name: self.author_name.clone(),
            icon_url: self.author_avatar_url.clone(),
        }
    }
}
