use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Freshness metadata attached to both result sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// When the upstream cache generated the document. `None` when the
    /// upstream value was missing or failed to parse.
    pub generated_at: Option<DateTime<Utc>>,
}

/// URL patterns for rendering an emoticon image at each size.
///
/// Shared by every emoticon in a result; substitute an emoticon's
/// `image_id` into a pattern to get its image URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTemplate {
    pub small: String,
    pub medium: String,
    pub large: String,
}

/// A single Twitch emoticon.
///
/// `code` and `image_id` are always present. `description` and
/// `first_seen` are only populated for global emoticons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emoticon {
    /// Chat code that produces the emoticon (e.g. `Kappa`).
    pub code: String,
    /// Image id, combined with [`ImageTemplate`] to build image URLs.
    pub image_id: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub first_seen: Option<NaiveDateTime>,
}

/// A Twitch channel with its subscriber badges and emoticons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub channel_id: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub badge: String,
    pub badge_3m: String,
    pub badge_6m: String,
    pub badge_12m: String,
    pub badge_24m: String,
    pub badge_starting: String,
    pub set: u32,
    #[serde(default)]
    pub first_seen: Option<NaiveDateTime>,
    pub emotes: Vec<Emoticon>,
}

/// Result of fetching the global emoticon list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalResult {
    pub meta: Metadata,
    pub template: ImageTemplate,
    /// Order is arbitrary; the source document keys emotes by code.
    pub emotes: Vec<Emoticon>,
}

/// Result of fetching the subscriber channel list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberResult {
    pub meta: Metadata,
    pub template: ImageTemplate,
    /// Order is arbitrary; the source document keys channels by id.
    pub channels: Vec<Channel>,
}
